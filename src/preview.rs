//! The preview-mode overlay for the VR page.
//!
//! Desktop visitors get a fixed panel explaining that the page is a preview
//! and how to move around. The overlay is two patches, a style block in the
//! head and a panel at the top of the body, each applied at most once.

use std::{fs, path::Path};

use log::debug;

use crate::{
    FileNotFound,
    patch::{Applied, Patch, Placement},
};

pub const PATCHES: [Patch<'static>; 2] = [
    Patch {
        name: "preview style",
        marker: "#preview-ui",
        anchor: "</head>",
        placement: Placement::BeforeAnchor,
        fragment: "    <style>
      #preview-ui {
        position: fixed; top: 20px; left: 20px; z-index: 100;
        background: rgba(0,0,0,0.7); color: white; padding: 15px;
        font-family: monospace; border: 2px solid #4e9a06;
      }
    </style>
",
    },
    Patch {
        name: "preview panel",
        marker: "id=\"preview-ui\"",
        anchor: "<body>",
        placement: Placement::AfterAnchor,
        fragment: r#"
    <div id="preview-ui">
      <h2 style="margin:0; color:#e9b96e;">PREVIEW MODE</h2>
      <p>Use WASD + Mouse to explore.<br>Click panels to return to site.<br>Enter VR on Quest for full experience.</p>
    </div>"#,
    },
];

/// Add the preview overlay to the page at `path`. Returns how many fragments
/// were inserted; zero means the page was already up to date.
///
/// # Errors
///
/// If the page does not exist, or cannot be read or written.
pub fn update(path: &Path) -> anyhow::Result<usize> {
    if !path.try_exists()? {
        return Err(FileNotFound(path.to_path_buf()).into());
    }

    let mut content = fs::read_to_string(path)?;
    let mut inserted = 0;

    for patch in &PATCHES {
        match patch.apply(&mut content) {
            Applied::Inserted => inserted += 1,
            outcome => debug!("{}: {outcome}", patch.name),
        }
    }

    fs::write(path, content)?;
    Ok(inserted)
}
