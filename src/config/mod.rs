// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[display]` - Grid display settings (thumbnail size, sorting)
//! - `[input]` - Input tuning (swipe gesture threshold)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.input.swipe_threshold_px = Some(80.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR_NAME: &str = "IcedFolio";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ICED_FOLIO_CONFIG_DIR";

pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 240;
pub const MIN_THUMBNAIL_HEIGHT: u32 = 120;
pub const MAX_THUMBNAIL_HEIGHT: u32 = 512;

/// Minimum horizontal travel, in logical pixels, for a touch gesture to count
/// as a swipe. Anything at or below the threshold is a dead zone.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 8.0;
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Grid display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Height of grid thumbnails in pixels.
    #[serde(
        default = "default_thumbnail_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<u32>,

    /// Image file sorting order when scanning a directory without a manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            sort_order: Some(SortOrder::default()),
        }
    }
}

/// Input tuning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Swipe gesture threshold in logical pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Grid display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Input tuning settings.
    #[serde(default)]
    pub input: InputConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_height() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring overrides.
///
/// Priority: explicit `base_dir` argument, then the `ICED_FOLIO_CONFIG_DIR`
/// environment variable, then the platform config directory.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path
    })
}

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}; using default settings ({err})",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            display: DisplayConfig {
                thumbnail_height: Some(320),
                sort_order: Some(SortOrder::ModifiedDate),
            },
            input: InputConfig {
                swipe_threshold_px: Some(75.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.display.thumbnail_height, config.display.thumbnail_height);
        assert_eq!(loaded.display.sort_order, config.display.sort_order);
        assert_eq!(loaded.input.swipe_threshold_px, config.input.swipe_threshold_px);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[display]\nthumbnail_height = \"tall\"")
            .expect("failed to write invalid config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_reads_sectioned_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[input]\nswipe_threshold_px = 25.0")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.input.swipe_threshold_px, Some(25.0));
        // Untouched sections keep their serde defaults
        assert_eq!(
            config.display.thumbnail_height,
            Some(DEFAULT_THUMBNAIL_HEIGHT)
        );
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_sets_thumbnail_and_threshold() {
        let config = Config::default();
        assert_eq!(
            config.display.thumbnail_height,
            Some(DEFAULT_THUMBNAIL_HEIGHT)
        );
        assert_eq!(
            config.input.swipe_threshold_px,
            Some(DEFAULT_SWIPE_THRESHOLD_PX)
        );
    }
}
