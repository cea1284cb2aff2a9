// SPDX-License-Identifier: MPL-2.0
//! Portfolio gallery model.
//!
//! A [`Gallery`] is a fixed, ordered sequence of [`GalleryItem`]s built once
//! at startup from a portfolio directory — either from a `portfolio.toml`
//! manifest (which also supplies captions) or, absent one, from a plain
//! directory scan. The sequence is never re-scanned afterwards; opening a
//! different portfolio replaces the whole gallery.

pub mod lightbox;
pub mod manifest;
pub mod scanner;
pub mod swipe;

pub use lightbox::Lightbox;
pub use swipe::SwipeTracker;

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One displayable photograph with its caption metadata.
///
/// Missing captions are empty strings, never absent fields — the lightbox
/// renders them as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Path to the image file.
    pub source: PathBuf,
    /// Alternative description of the photograph.
    pub alt_text: String,
    /// Display title.
    pub title: String,
    /// Where the photograph was taken.
    pub location: String,
}

/// Fixed, ordered sequence of gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    root: PathBuf,
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Creates a gallery from an already-built item list.
    #[must_use]
    pub fn new(root: PathBuf, items: Vec<GalleryItem>) -> Self {
        Self { root, items }
    }

    /// Creates an empty gallery (the state before a portfolio is opened).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a portfolio from a directory, or from any file inside one.
    ///
    /// If the directory contains a `portfolio.toml` manifest, the manifest
    /// defines the items and their order; otherwise the directory is scanned
    /// for supported image files sorted by `sort_order`.
    ///
    /// A directory with no images is a valid, empty portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or the manifest fails
    /// to parse.
    pub fn load(path: &Path, sort_order: SortOrder) -> Result<Self> {
        let root = if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent()
                .ok_or_else(|| Error::Io("Portfolio path has no parent directory".into()))?
                .to_path_buf()
        };

        let manifest_path = root.join(manifest::MANIFEST_FILE);
        let items = if manifest_path.exists() {
            manifest::load(&root)?
        } else {
            scanner::scan_portfolio(&root, sort_order)?
        };

        Ok(Self::new(root, items))
    }

    /// Returns the portfolio root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the ordered items.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Returns the item at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the gallery has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_gallery_has_no_items() {
        let gallery = Gallery::empty();
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.get(0), None);
    }

    #[test]
    fn load_prefers_manifest_over_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.jpg"), b"fake").expect("write image");
        fs::write(temp_dir.path().join("b.jpg"), b"fake").expect("write image");
        fs::write(
            temp_dir.path().join("portfolio.toml"),
            "[[item]]\nsource = \"b.jpg\"\ntitle = \"Dusk\"\n",
        )
        .expect("write manifest");

        let gallery =
            Gallery::load(temp_dir.path(), SortOrder::Alphabetical).expect("load failed");

        // Manifest defines the set: only b.jpg, not the scanned pair
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.get(0).unwrap().title, "Dusk");
        assert_eq!(gallery.get(0).unwrap().source, temp_dir.path().join("b.jpg"));
    }

    #[test]
    fn load_scans_directory_without_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("b.jpg"), b"fake").expect("write image");
        fs::write(temp_dir.path().join("a.png"), b"fake").expect("write image");
        fs::write(temp_dir.path().join("notes.txt"), b"not an image").expect("write file");

        let gallery =
            Gallery::load(temp_dir.path(), SortOrder::Alphabetical).expect("load failed");

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.get(0).unwrap().source, temp_dir.path().join("a.png"));
        assert_eq!(gallery.get(1).unwrap().source, temp_dir.path().join("b.jpg"));
    }

    #[test]
    fn load_accepts_a_file_inside_the_portfolio() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image = temp_dir.path().join("a.jpg");
        fs::write(&image, b"fake").expect("write image");

        let gallery = Gallery::load(&image, SortOrder::Alphabetical).expect("load failed");
        assert_eq!(gallery.root(), temp_dir.path());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn load_of_imageless_directory_is_empty_not_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("notes.txt"), b"no images here").expect("write file");

        let gallery =
            Gallery::load(temp_dir.path(), SortOrder::Alphabetical).expect("load failed");
        assert!(gallery.is_empty());
    }
}
