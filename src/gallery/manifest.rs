// SPDX-License-Identifier: MPL-2.0
//! Portfolio manifest parsing.
//!
//! A `portfolio.toml` manifest lists the photographs of a portfolio together
//! with their captions. Item order in the manifest is the gallery order:
//!
//! ```toml
//! [[item]]
//! source = "dunes.jpg"
//! alt = "Wind-carved dunes at dawn"
//! title = "First Light"
//! location = "Death Valley, California"
//! ```
//!
//! `alt`, `title`, and `location` are optional; missing captions become empty
//! strings. Relative `source` paths resolve against the portfolio directory.

use crate::error::{Error, Result};
use crate::gallery::GalleryItem;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the portfolio manifest.
pub const MANIFEST_FILE: &str = "portfolio.toml";

#[derive(Debug, serde::Deserialize)]
struct ManifestItem {
    source: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
}

#[derive(Debug, Default, serde::Deserialize)]
struct Manifest {
    #[serde(default, rename = "item")]
    items: Vec<ManifestItem>,
}

/// Loads the manifest from the given portfolio directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the manifest cannot be read and
/// [`Error::Manifest`] if it fails to parse.
pub fn load(root: &Path) -> Result<Vec<GalleryItem>> {
    let path = root.join(MANIFEST_FILE);
    let content = fs::read_to_string(path)?;
    parse(root, &content)
}

/// Parses manifest content into ordered gallery items.
pub(crate) fn parse(root: &Path, content: &str) -> Result<Vec<GalleryItem>> {
    let manifest: Manifest = toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    Ok(manifest
        .items
        .into_iter()
        .map(|item| {
            let source = resolve_source(root, &item.source);
            let alt_text = if item.alt.is_empty() {
                stem_of(&source)
            } else {
                item.alt
            };
            GalleryItem {
                source,
                alt_text,
                title: item.title,
                location: item.location,
            }
        })
        .collect())
}

fn resolve_source(root: &Path, source: &str) -> PathBuf {
    let path = PathBuf::from(source);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Fallback alternative text: the file name without its extension.
fn stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_manifest_order() {
        let content = r#"
            [[item]]
            source = "c.jpg"

            [[item]]
            source = "a.jpg"

            [[item]]
            source = "b.jpg"
        "#;

        let items = parse(Path::new("/portfolio"), content).expect("parse failed");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].source, Path::new("/portfolio/c.jpg"));
        assert_eq!(items[1].source, Path::new("/portfolio/a.jpg"));
        assert_eq!(items[2].source, Path::new("/portfolio/b.jpg"));
    }

    #[test]
    fn missing_captions_become_empty_strings() {
        let content = "[[item]]\nsource = \"dunes.jpg\"\n";

        let items = parse(Path::new("/portfolio"), content).expect("parse failed");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].location, "");
    }

    #[test]
    fn captions_are_carried_through() {
        let content = r#"
            [[item]]
            source = "dunes.jpg"
            alt = "Wind-carved dunes at dawn"
            title = "First Light"
            location = "Death Valley, California"
        "#;

        let items = parse(Path::new("/portfolio"), content).expect("parse failed");
        assert_eq!(items[0].alt_text, "Wind-carved dunes at dawn");
        assert_eq!(items[0].title, "First Light");
        assert_eq!(items[0].location, "Death Valley, California");
    }

    #[test]
    fn empty_alt_falls_back_to_file_stem() {
        let content = "[[item]]\nsource = \"dunes.jpg\"\n";

        let items = parse(Path::new("/portfolio"), content).expect("parse failed");
        assert_eq!(items[0].alt_text, "dunes");
    }

    #[test]
    fn absolute_sources_are_kept_as_is() {
        let content = "[[item]]\nsource = \"/elsewhere/dunes.jpg\"\n";

        let items = parse(Path::new("/portfolio"), content).expect("parse failed");
        assert_eq!(items[0].source, Path::new("/elsewhere/dunes.jpg"));
    }

    #[test]
    fn invalid_manifest_returns_manifest_error() {
        let content = "[[item]]\ntitle = \"no source field\"\n";

        match parse(Path::new("/portfolio"), content) {
            Err(Error::Manifest(message)) => assert!(!message.is_empty()),
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn empty_manifest_yields_no_items() {
        let items = parse(Path::new("/portfolio"), "").expect("parse failed");
        assert!(items.is_empty());
    }
}
