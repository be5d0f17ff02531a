//! Maintenance tools for the LatticeVeil website.
//!
//! The website is a static GitHub Pages site. Each binary in this crate is a
//! small, single-pass edit of one HTML document in a checkout of the site:
//!
//! * `create-vr-page` - write the WebXR room page to `vr/index.html`
//! * `scrub-index` - repair mojibake and whitespace damage in `index.html`
//! * `update-vr-preview` - add the preview-mode overlay to the VR page
//! * `update-website-vr` - wire the VR portal into the main page
//!
//! Every insertion made by the updaters is guarded by a marker substring, so
//! running a binary a second time changes nothing.

// This file is part of latticeveil-tools.
//
// latticeveil-tools is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// latticeveil-tools is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(clippy::panic)]

use std::path::PathBuf;

use thiserror::Error;

pub mod page;
pub mod patch;
pub mod preview;
pub mod scrub;
pub mod site;
pub mod utils;

/// The main page of the site, relative to a checkout of the site repository.
pub const SITE_INDEX: &str = "index.html";

/// The WebXR room page, relative to a checkout of the site repository.
pub const VR_INDEX: &str = "vr/index.html";

#[derive(Debug, Error)]
#[error("file not found: {}", .0.display())]
pub struct FileNotFound(pub PathBuf);

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the latticeveil-tools project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the latticeveil-tools project
Licensed under the AGPLv3"
);
