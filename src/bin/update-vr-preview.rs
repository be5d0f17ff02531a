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

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser};

use latticeveil_tools::{COPYRIGHT, LONG_VERSION, VR_INDEX, preview, utils};

/// Add the preview-mode overlay to the VR page
///
/// Inserts a style block and an explanatory panel, each at most once. The
/// page must already exist.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about)]
struct Args {
    /// The VR page to update
    #[arg(default_value = VR_INDEX, index = 1, value_name = "path")]
    path: PathBuf,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger();

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command().name("update-vr-preview").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-01-12");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("update-vr-preview.1", buffer)?;
        return Ok(());
    }

    preview::update(&args.path)?;
    println!("Updated {} with the preview UI.", args.path.display());

    Ok(())
}
