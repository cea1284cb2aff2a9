// SPDX-License-Identifier: MPL-2.0
//! Image prefetch cache for faster lightbox navigation.
//!
//! When the lightbox opens or navigates, the wraparound neighbors of the
//! current photograph are decoded in the background so the next navigation
//! step renders without a visible load.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by a byte budget
//! - **Path-keyed**: Images indexed by their file path

use crate::error::Result;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default prefetch cache size in bytes (32 MB).
/// Allows ~4 full HD images (8 MB each) or ~16 smaller images.
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Default maximum number of images to cache.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates a disabled prefetch configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Cached image entry with its memory footprint.
#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,

    /// Size of this entry in bytes (width * height * 4 for RGBA).
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: ImageData) -> Self {
        let size_bytes = (image.width as usize) * (image.height as usize) * 4;
        Self { image, size_bytes }
    }
}

/// Statistics about prefetch cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefetchStats {
    /// Number of cache hits (image found).
    pub hits: u64,

    /// Number of cache misses (image not found).
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,
}

/// LRU cache for prefetched images.
///
/// Provides memory-bounded caching with LRU eviction policy, optimized for
/// navigation between adjacent gallery items.
pub struct PrefetchCache {
    /// LRU cache mapping file paths to image entries.
    cache: LruCache<PathBuf, CacheEntry>,

    /// Cache configuration.
    config: PrefetchConfig,

    /// Current total size in bytes.
    current_bytes: usize,

    /// Performance statistics.
    stats: PrefetchStats,
}

impl PrefetchCache {
    /// Creates a new prefetch cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_IMAGES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("DEFAULT_MAX_IMAGES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: PrefetchStats::default(),
        }
    }

    /// Creates a new prefetch cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PrefetchConfig::default())
    }

    /// Inserts an image into the cache.
    ///
    /// Returns `true` if the image was inserted, `false` if caching is disabled
    /// or the image is too large.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let entry = CacheEntry::new(image);
        let image_size = entry.size_bytes;

        // Don't cache images larger than half the cache budget
        if image_size > self.config.max_bytes / 2 {
            return false;
        }

        // Evict images until we have room
        while self.current_bytes + image_size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // Replacing an existing path must not double-count its bytes
        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += entry.size_bytes;
        self.cache.put(path, entry);

        true
    }

    /// Gets an image from the cache by path.
    ///
    /// Updates LRU order on access. The returned `ImageData` is a cheap clone;
    /// the underlying pixel buffer is reference-counted inside the handle.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }

        if let Some(entry) = self.cache.get(path) {
            self.stats.hits += 1;
            Some(entry.image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks if an image is cached for the given path without updating LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        if !self.config.enabled {
            return false;
        }
        self.cache.contains(path)
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }

    /// Returns the current number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl Default for PrefetchCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for PrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefetchCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Loads an image for the prefetch cache.
///
/// This is the async function handed to the background task. Returns the path
/// together with the result so the update loop can tell stale results apart
/// from the currently displayed item.
pub async fn load_image_for_prefetch(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || crate::media::load_image(&path_clone))
        .await
        .unwrap_or_else(|e| {
            Err(crate::error::Error::Io(format!(
                "Prefetch task failed: {e}"
            )))
        });

    (path, result)
}
