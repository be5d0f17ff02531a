//! Repair of a mojibake-damaged document.
//!
//! The main page was mangled by repeated decode/encode mistakes: UTF-8 text
//! read as Windows-1252 or Latin-1 and written back out, sometimes more than
//! once. The scrub is a fixed, ordered pipeline: normalize whitespace, rewrite
//! the known headers, substitute the known bad sequences, sweep up what is
//! left, and re-encode as clean UTF-8.

use std::{fs, path::Path};

use log::warn;
use regex::Regex;

/// Section headers are rewritten wholesale. Whatever junk sits between the
/// opening tag and the English text is thrown away and the canonical header
/// takes its place.
const HEADERS: [(&str, &str); 8] = [
    (
        r"(?i)<h3>.*?Infinite Terrain</h3>",
        "<h3>\u{1f3d4}\u{fe0f} Infinite Terrain</h3>",
    ),
    (
        r"(?i)<h3>.*?Greedy Meshing</h3>",
        "<h3>\u{1f371} Greedy Meshing</h3>",
    ),
    (
        r"(?i)<h3>.*?EOS Multiplayer</h3>",
        "<h3>\u{1fa90} EOS Multiplayer</h3>",
    ),
    (
        r"(?i)<h3>.*?Powered by GitHub Pages</h3>",
        "<h3>\u{1f419} Powered by GitHub Pages</h3>",
    ),
    (
        r"(?i)<h2>.*?The Continuist Papers</h2>",
        "<h2>\u{1f4dc} The Continuist Papers</h2>",
    ),
    (
        r"(?i)<h3>.*?Quick Summary</h3>",
        "<h3>\u{1f50d} Quick Summary</h3>",
    ),
    (
        r"(?i)<h3>.*?Connect with LatticeVeil</h3>",
        "<h3>\u{1f517} Connect with LatticeVeil</h3>",
    ),
    (
        r"(?i)<h3>.*?Engine: Three.js Model Inspector</h3>",
        "<h3>\u{1f56f}\u{fe0f} Engine: Three.js Model Inspector</h3>",
    ),
];

/// Known bad sequences, replaced in order. The order matters: some entries
/// are prefixes of later ones, exactly as the damage was catalogued.
const MOJIBAKE: [(&str, &str); 37] = [
    // Punctuation seen through one wrong decode.
    ("â€\u{201d}", "\u{2014}"),
    ("â€\u{201c}", "\u{2013}"),
    ("â€œ", "\u{201c}"),
    ("â€\u{9d}", "\u{201d}"),
    ("â€™", "\u{2019}"),
    // Punctuation seen through two wrong decodes.
    ("Ã¢â\u{82}¬\u{9c}", "\u{201c}"),
    ("Ã¢â\u{82}¬\u{9d}", "\u{201d}"),
    ("Ã¢â\u{82}¬\u{99}", "\u{2019}"),
    ("Ã¢â\u{82}¬\u{94}", "\u{2014}"),
    ("Ã¢â\u{82}¬\u{93}", "\u{2013}"),
    ("â\u{80}\u{94}", "\u{2014}"),
    ("â\u{80}\u{93}", "\u{2013}"),
    ("â\u{80}\u{99}", "\u{2019}"),
    ("â\u{80}\u{9c}", "\u{201c}"),
    ("â\u{80}\u{9d}", "\u{201d}"),
    // Emoji seen through two wrong decodes.
    ("Ã°Å¸â\u{80}\u{9c}\u{8c}", "\u{1f4dc}"),
    ("Ã°Å¸â\u{80}\u{9c}\u{96}", "\u{1f4d6}"),
    ("Ã°Å¸â\u{80}\u{94}", "\u{1f50d}"),
    // Emoji seen through one wrong decode.
    ("ðŸ\u{201c}œ", "\u{1f4dc}"),
    ("ðŸ\u{201c}\u{2013}", "\u{1f4d6}"),
    ("ðŸ\u{2014}º", "\u{1f5fa}\u{fe0f}"),
    ("ðŸ\u{2013}¼", "\u{1f5bc}\u{fe0f}"),
    ("ðŸš€", "\u{1f680}"),
    ("ðŸª¨", "\u{1faa8}"),
    ("ðŸ\u{201c}š", "\u{1f4da}"),
    ("âš\u{2019}", "\u{2692}\u{fe0f}"),
    ("ðŸ§±", "\u{1f9f1}"),
    ("ðŸ\u{201d}\u{201e}", "\u{1f504}"),
    ("ðŸ\u{201c}¦", "\u{1f4e6}"),
    ("ðŸŒ\u{90}", "\u{1f310}"),
    ("ðŸ¥½", "\u{1f97d}"),
    ("ðŸ\u{201c}±", "\u{1f4f1}"),
    ("âš\u{2013}", "\u{2696}\u{fe0f}"),
    ("â™»", "\u{267b}\u{fe0f}"),
    ("ðŸ\u{201d}", "\u{1f56f}\u{fe0f}"),
    ("ðŸ\u{201d}¥", "\u{1f525}"),
    ("ðŸ.\u{201d}\u{2014}", "\u{1f517}"),
];

/// Best-effort sweeps for double-encoded junk with no entry in the table.
/// These can eat legitimate text that happens to match.
const CATCH_ALL: [&str; 2] = [
    "Ã\u{192}Â[^\\s<]*",
    r"Ã[A-Za-z0-9\x{80}-\x{FF}]{2,}",
];

/// Non-breaking hyphens that survived an encode round trip.
const HYPHENS: [(&str, &str); 3] = [
    ("Stoneâ\u{80}\u{91}Braced", "Stone-Braced"),
    ("Continuistâ\u{80}\u{91}era", "Continuist-era"),
    ("inâ\u{80}\u{91}game", "in-game"),
];

/// Decode every byte to the char with the same code point. This never fails,
/// no matter how damaged the document is.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Run the scrub pipeline over a decoded document.
///
/// # Errors
///
/// If a repair pattern fails to compile.
pub fn scrub(content: &str) -> anyhow::Result<String> {
    let mut content = content.replace("\r\n", "\n");
    content = Regex::new(r"\n{3,}")?
        .replace_all(&content, "\n\n")
        .into_owned();

    for (pattern, canonical) in HEADERS {
        content = Regex::new(pattern)?
            .replace_all(&content, canonical)
            .into_owned();
    }

    for (corrupted, correct) in MOJIBAKE {
        content = content.replace(corrupted, correct);
    }

    for pattern in CATCH_ALL {
        content = Regex::new(pattern)?.replace_all(&content, "").into_owned();
    }

    for (broken, fixed) in HYPHENS {
        content = content.replace(broken, fixed);
    }

    if content.matches("function openFaction").count() > 1 {
        // Known duplication of the inline script. No rewrite is attempted.
        warn!("the document defines openFaction more than once");
    }

    Ok(content)
}

/// Scrub the document at `path` in place: permissive read, pipeline,
/// overwrite as UTF-8 without a byte-order mark.
///
/// # Errors
///
/// If the file cannot be read or written.
pub fn scrub_file(path: &Path) -> anyhow::Result<()> {
    let data = fs::read(path)?;
    let content = scrub(&decode_latin1(&data))?;
    fs::write(path, content)?;

    Ok(())
}
