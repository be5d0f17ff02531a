//! Wiring the VR portal into the main page.
//!
//! Four independent patches: a style rule for the VR button, the button
//! itself, the headset-detection and hash-tab-sync script, and a devlog entry
//! announcing the portal. The page may contain bytes that are not valid
//! UTF-8, so everything here works on raw bytes.
//!
//! The anchors are disjoint substrings of the page, so all four patches can
//! land in a single run without disturbing one another.

use std::{fs, path::Path};

use log::debug;

use crate::patch::{Applied, Patch, Placement};

pub const PATCHES: [Patch<'static>; 4] = [
    Patch {
        name: "vr button style",
        marker: "#vrIcon",
        anchor: "box-shadow: 4px 4px 0px #000; }",
        placement: Placement::AfterAnchor,
        fragment: r"
        #vrIcon {
            display: none;
            position: fixed;
            bottom: 20px;
            right: 20px;
            z-index: 1000;
            background: #4e9a06;
            color: white;
            border: 4px solid white;
            padding: 15px;
            border-radius: 50%;
            cursor: pointer;
            box-shadow: 0 0 15px rgba(78, 154, 6, 0.5);
            transition: transform 0.2s;
        }
        #vrIcon:hover { transform: scale(1.1); }
        #vrIcon i { font-size: 24px; }
",
    },
    Patch {
        name: "vr button",
        marker: "id=\"vrIcon\"",
        anchor: "<body>",
        placement: Placement::AfterAnchor,
        fragment: r#"
    <button id="vrIcon" onclick="window.location.href='./vr/'" title="Enter VR (Quest Only)">
        <i class="fas fa-vr-cardboard"></i>
    </button>
"#,
    },
    Patch {
        name: "vr detection script",
        marker: "checkVR();",
        anchor: "populateGalleries();",
        placement: Placement::AfterAnchor,
        fragment: r"
        // WebXR / Quest Detection
        async function checkVR() {
            const isQuest = /OculusBrowser|Quest/i.test(navigator.userAgent);
            const vrSupported = navigator.xr && await navigator.xr.isSessionSupported('immersive-vr');
            if (isQuest && vrSupported) {
                document.getElementById('vrIcon').style.display = 'block';
            }
        }
        checkVR();

        // Sync Tabs with URL Hash
        function syncTab() {
            const hash = window.location.hash.replace('#', '');
            if (hash && document.getElementById(hash)) {
                const btn = Array.from(document.querySelectorAll('.tab-link')).find(l =>
                    l.textContent.toLowerCase().includes(hash.toLowerCase()) ||
                    (hash === 'coding' && l.textContent.includes('DEV LOG')) ||
                    (hash === 'assets' && l.textContent.includes('TEXTURES'))
                );
                if (btn) btn.click();
            }
        }
        window.addEventListener('hashchange', syncTab);
        syncTab();
",
    },
    Patch {
        name: "devlog entry",
        marker: "WebXR VR Portal",
        anchor: r#"<div id="log-website" class="sub-content">"#,
        placement: Placement::AfterAnchor,
        fragment: r#"

                    <div class="log-entry">
                        <div class="log-header">
                            <h3>🥽 New Feature: WebXR VR Portal</h3>
                            <span class="log-date">JAN 12, 2026</span>
                        </div>
                        <div class="log-body">
                            <p>Meta Quest users rejoice! We've launched an experimental <strong>WebXR VR Portal</strong>. If you are browsing on a Quest 2 or 3, look for the VR icon in the bottom corner to enter an immersive voxel room.</p>
                            <p>The VR room features a central kiosk where you can jump directly back to specific site sections while remaining in your headset.</p>
                        </div>
                    </div>"#,
    },
];

/// Apply the four VR-portal patches to the page at `path`. Returns how many
/// fragments were inserted.
///
/// A patch whose anchor is missing from the page is skipped without an
/// error; the page simply does not get that feature.
///
/// # Errors
///
/// If the page cannot be read or written.
pub fn update(path: &Path) -> anyhow::Result<usize> {
    let mut data = fs::read(path)?;
    let mut inserted = 0;

    for patch in &PATCHES {
        match patch.apply_bytes(&mut data) {
            Applied::Inserted => inserted += 1,
            outcome => debug!("{}: {outcome}", patch.name),
        }
    }

    fs::write(path, data)?;
    Ok(inserted)
}
