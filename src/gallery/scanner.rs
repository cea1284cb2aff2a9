// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for portfolios without a manifest.
//!
//! Scans a directory for supported image formats, filters out everything
//! else, and sorts the result according to the configured sort order.

use crate::config::SortOrder;
use crate::error::Result;
use crate::gallery::GalleryItem;
use crate::media;
use std::path::{Path, PathBuf};

/// Scans a portfolio directory for supported image files and sorts them.
///
/// Captions are empty — there is no manifest to supply them — and the
/// alternative text falls back to the file name without its extension.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_portfolio(root: &Path, sort_order: SortOrder) -> Result<Vec<GalleryItem>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);

    Ok(image_files.into_iter().map(item_from_path).collect())
}

fn item_from_path(source: PathBuf) -> GalleryItem {
    let alt_text = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();

    GalleryItem {
        source,
        alt_text,
        title: String::new(),
        location: String::new(),
    }
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}
