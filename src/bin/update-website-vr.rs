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

use latticeveil_tools::{COPYRIGHT, LONG_VERSION, SITE_INDEX, site, utils};

/// Wire the VR portal into the main page
///
/// Inserts the VR button and its style, the headset-detection script, and
/// the devlog entry, each at most once.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about)]
struct Args {
    /// The page to update
    #[arg(default_value = SITE_INDEX, index = 1, value_name = "path")]
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
        let cmd = Args::command().name("update-website-vr").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-01-12");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("update-website-vr.1", buffer)?;
        return Ok(());
    }

    site::update(&args.path)?;
    println!(
        "Updated {} with the VR button, detection script, and devlog entry.",
        args.path.display()
    );

    Ok(())
}
