use std::fs;

use latticeveil_tools::{page, preview, scrub, site};

/// A stand-in for the main page with every anchor the site updater wants.
const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
    .card { box-shadow: 4px 4px 0px #000; }
</style>
</head>
<body>
<div id="log-website" class="sub-content">
</div>
<script>
    populateGalleries();
</script>
</body>
</html>
"#;

#[test]
fn page_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("vr").join("index.html");

    page::create(&path)?;
    assert_eq!(fs::read_to_string(&path)?, page::VR_PAGE);

    Ok(())
}

#[test]
fn page_overwrites_unconditionally() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");

    fs::write(&path, "stale")?;
    page::create(&path)?;
    assert_eq!(fs::read_to_string(&path)?, page::VR_PAGE);

    Ok(())
}

#[test]
fn preview_requires_the_page() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.html");

    let result = preview::update(&path);
    assert!(result.is_err());
    if let Err(error) = result {
        assert!(error.to_string().starts_with("file not found"));
    }

    Ok(())
}

#[test]
fn preview_is_idempotent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");
    fs::write(&path, page::VR_PAGE)?;

    assert_eq!(preview::update(&path)?, 2);
    let once = fs::read_to_string(&path)?;
    assert!(once.contains("#preview-ui"));
    assert!(once.contains("id=\"preview-ui\""));
    assert!(once.contains("PREVIEW MODE"));

    assert_eq!(preview::update(&path)?, 0);
    assert_eq!(fs::read_to_string(&path)?, once);

    Ok(())
}

#[test]
fn preview_patches_are_independent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");

    // The style marker is pre-seeded, so only the panel goes in.
    fs::write(
        &path,
        "<head>\n<!-- #preview-ui -->\n</head>\n<body>\n</body>\n",
    )?;

    assert_eq!(preview::update(&path)?, 1);
    let content = fs::read_to_string(&path)?;
    assert!(!content.contains("<style>"));
    assert!(content.contains("id=\"preview-ui\""));

    Ok(())
}

#[test]
fn site_update_applies_all_four() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");
    fs::write(&path, INDEX)?;

    assert_eq!(site::update(&path)?, 4);
    let content = fs::read_to_string(&path)?;
    assert!(content.contains("#vrIcon {"));
    assert!(content.contains("id=\"vrIcon\""));
    assert!(content.contains("checkVR();"));
    assert!(content.contains("WebXR VR Portal"));

    Ok(())
}

#[test]
fn site_update_is_idempotent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");
    fs::write(&path, INDEX)?;

    assert_eq!(site::update(&path)?, 4);
    let once = fs::read(&path)?;

    assert_eq!(site::update(&path)?, 0);
    assert_eq!(fs::read(&path)?, once);

    Ok(())
}

#[test]
fn site_update_skips_missing_anchors() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");

    let trimmed = INDEX.replace("    populateGalleries();\n", "");
    fs::write(&path, &trimmed)?;

    assert_eq!(site::update(&path)?, 3);
    let content = fs::read_to_string(&path)?;
    assert!(!content.contains("checkVR();"));
    assert!(content.contains("id=\"vrIcon\""));

    Ok(())
}

#[test]
fn site_update_without_anchors_changes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");
    fs::write(&path, "<html><p>nothing to hook into</p></html>")?;

    assert_eq!(site::update(&path)?, 0);
    assert_eq!(
        fs::read_to_string(&path)?,
        "<html><p>nothing to hook into</p></html>"
    );

    Ok(())
}

#[test]
fn scrub_repairs_a_damaged_page() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");

    // Invalid UTF-8 in the header junk must not stop the read.
    let mut damaged = b"<h3>\xF0\x9F junk Infinite Terrain</h3>\r\n".to_vec();
    damaged.extend_from_slice(b"\r\n\r\n\r\n<p>done</p>\n");
    fs::write(&path, damaged)?;

    scrub::scrub_file(&path)?;

    let content = fs::read_to_string(&path)?;
    assert_eq!(
        content,
        "<h3>\u{1f3d4}\u{fe0f} Infinite Terrain</h3>\n\n<p>done</p>\n"
    );

    Ok(())
}

#[test]
fn scrub_leaves_a_clean_page_alone() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("index.html");

    let clean = "<p>All good.</p>\n\n<p>Still good.</p>\n";
    fs::write(&path, clean)?;

    scrub::scrub_file(&path)?;
    assert_eq!(fs::read_to_string(&path)?, clean);

    Ok(())
}
