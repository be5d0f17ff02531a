//! Guarded, idempotent insertion of text fragments into an HTML document.
//!
//! A [`Patch`] carries a marker and an anchor. The marker is a substring that
//! only exists once the fragment has been inserted; if it is already present
//! the patch does nothing. The anchor is a substring that must already exist
//! in the document and names the insertion point. A missing anchor is not an
//! error, the patch is skipped.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    BeforeAnchor,
    AfterAnchor,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Applied {
    Inserted,
    MarkerPresent,
    AnchorMissing,
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applied::Inserted => write!(f, "inserted"),
            Applied::MarkerPresent => write!(f, "already applied"),
            Applied::AnchorMissing => write!(f, "anchor missing"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Patch<'a> {
    pub name: &'a str,
    pub marker: &'a str,
    pub anchor: &'a str,
    pub placement: Placement,
    pub fragment: &'a str,
}

impl Patch<'_> {
    /// Apply the patch to a text document in place.
    pub fn apply(&self, document: &mut String) -> Applied {
        if document.contains(self.marker) {
            return Applied::MarkerPresent;
        }

        let Some(index) = document.find(self.anchor) else {
            return Applied::AnchorMissing;
        };

        match self.placement {
            Placement::BeforeAnchor => document.insert_str(index, self.fragment),
            Placement::AfterAnchor => {
                document.insert_str(index + self.anchor.len(), self.fragment);
            }
        }

        Applied::Inserted
    }

    /// Apply the patch to a raw byte document in place.
    ///
    /// The main page may hold text that is not valid UTF-8, so the site
    /// updater splices bytes instead of decoding.
    pub fn apply_bytes(&self, document: &mut Vec<u8>) -> Applied {
        if find(document, self.marker.as_bytes()).is_some() {
            return Applied::MarkerPresent;
        }

        let Some(index) = find(document, self.anchor.as_bytes()) else {
            return Applied::AnchorMissing;
        };

        let index = match self.placement {
            Placement::BeforeAnchor => index,
            Placement::AfterAnchor => index + self.anchor.len(),
        };

        let tail = document.split_off(index);
        document.extend_from_slice(self.fragment.as_bytes());
        document.extend_from_slice(&tail);
        Applied::Inserted
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: Patch<'static> = Patch {
        name: "style",
        marker: "#banner",
        anchor: "</head>",
        placement: Placement::BeforeAnchor,
        fragment: "<style>#banner { color: red; }</style>\n",
    };

    const BANNER: Patch<'static> = Patch {
        name: "banner",
        marker: "id=\"banner\"",
        anchor: "<body>",
        placement: Placement::AfterAnchor,
        fragment: "\n<div id=\"banner\"></div>",
    };

    #[test]
    fn insert_before_anchor() {
        let mut document = "<head>\n</head>\n<body>\n</body>".to_string();
        assert_eq!(STYLE.apply(&mut document), Applied::Inserted);
        assert_eq!(
            document,
            "<head>\n<style>#banner { color: red; }</style>\n</head>\n<body>\n</body>"
        );
    }

    #[test]
    fn insert_after_anchor() {
        let mut document = "<body>\n</body>".to_string();
        assert_eq!(BANNER.apply(&mut document), Applied::Inserted);
        assert_eq!(document, "<body>\n<div id=\"banner\"></div>\n</body>");
    }

    #[test]
    fn marker_guards_reapplication() {
        let mut document = "<head>\n</head>".to_string();
        assert_eq!(STYLE.apply(&mut document), Applied::Inserted);

        let once = document.clone();
        assert_eq!(STYLE.apply(&mut document), Applied::MarkerPresent);
        assert_eq!(document, once);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let mut document = "<html></html>".to_string();
        assert_eq!(STYLE.apply(&mut document), Applied::AnchorMissing);
        assert_eq!(document, "<html></html>");
    }

    #[test]
    fn bytes_insert_and_guard() {
        let mut document = b"<body>\n</body>".to_vec();
        assert_eq!(BANNER.apply_bytes(&mut document), Applied::Inserted);
        assert_eq!(document, b"<body>\n<div id=\"banner\"></div>\n</body>");

        let once = document.clone();
        assert_eq!(BANNER.apply_bytes(&mut document), Applied::MarkerPresent);
        assert_eq!(document, once);
    }

    #[test]
    fn bytes_missing_anchor_is_a_no_op() {
        let mut document = b"<html></html>".to_vec();
        assert_eq!(BANNER.apply_bytes(&mut document), Applied::AnchorMissing);
        assert_eq!(document, b"<html></html>");
    }

    #[test]
    fn bytes_patching_ignores_invalid_utf8() {
        let mut document = b"<body>\n\xF0\x9F bad bytes\n</body>".to_vec();
        assert_eq!(BANNER.apply_bytes(&mut document), Applied::Inserted);
        assert_eq!(
            document,
            b"<body>\n<div id=\"banner\"></div>\n\xF0\x9F bad bytes\n</body>"
        );
    }
}
