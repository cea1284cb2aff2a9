// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for portfolio photographs.
//!
//! Decoding happens off the UI thread; the async wrappers hand the blocking
//! work to the tokio blocking pool and return plain `Result`s for the update
//! loop to consume.

pub mod prefetch;

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;

/// Supported image extensions
pub mod extensions {
    /// Image file extensions recognized when scanning a portfolio directory.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions::IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads an image from the given path at full resolution.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// the bytes are not a supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();
    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Loads an image and downscales it to at most `max_height` pixels tall,
/// preserving aspect ratio. Images already within bounds are kept as-is.
///
/// The width bound is capped at 4:1 so extreme panoramas cannot produce
/// thumbnails wider than the grid.
///
/// # Errors
///
/// Same failure modes as [`load_image`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_height: u32) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Image(e.to_string()))?;

    let thumb = img.thumbnail(max_height.saturating_mul(4), max_height);
    let (width, height) = thumb.dimensions();
    let rgba_img = thumb.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes a grid thumbnail on the blocking pool.
pub async fn load_thumbnail_async(path: PathBuf, max_height: u32) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_thumbnail(&path, max_height))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Thumbnail task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_thumbnail_downscales_tall_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("tall.png");

        let image = RgbaImage::from_pixel(100, 200, Rgba([0, 255, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_thumbnail(&image_path, 50).expect("thumbnail should load");
        assert_eq!(data.height, 50);
        assert_eq!(data.width, 25); // aspect preserved
    }

    #[test]
    fn load_thumbnail_keeps_small_images_unscaled() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("small.png");

        let image = RgbaImage::from_pixel(10, 8, Rgba([0, 0, 255, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_thumbnail(&image_path, 50).expect("thumbnail should load");
        assert_eq!(data.width, 10);
        assert_eq!(data.height, 8);
    }

    #[test]
    fn is_supported_image_checks_extension_case_insensitively() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("b.JPEG")));
        assert!(is_supported_image(Path::new("c.WebP")));
        assert!(!is_supported_image(Path::new("d.mp4")));
        assert!(!is_supported_image(Path::new("e.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn load_thumbnail_async_decodes_off_thread() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(8, 4, Rgba([255, 255, 255, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_thumbnail_async(image_path, 240)
            .await
            .expect("async thumbnail should load");
        assert_eq!(data.width, 8);
    }
}
