// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Auto-advance interval and swipe threshold
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "ICED_VITRINE_CONFIG_DIR";

/// Auto-advance interval for carousels, in milliseconds.
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 4000;

/// Horizontal drag distance, in pixels, before a press/release pair counts
/// as a swipe instead of a click.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds.
    #[serde(
        default = "default_auto_advance_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_ms: Option<u64>,

    /// Swipe detection threshold in pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

fn default_auto_advance_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ADVANCE_MS)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

/// Complete persisted configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Config {
    /// Effective auto-advance interval, falling back to the default.
    pub fn auto_advance_ms(&self) -> u64 {
        self.carousel
            .auto_advance_ms
            .unwrap_or(DEFAULT_AUTO_ADVANCE_MS)
    }

    /// Effective swipe threshold, falling back to the default.
    pub fn swipe_threshold(&self) -> f32 {
        self.carousel
            .swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Resolves the directory holding `settings.toml`.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("iced_vitrine"))
}

fn config_file_path() -> Result<PathBuf> {
    config_dir()
        .map(|dir| dir.join(CONFIG_FILE))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from the resolved config directory.
///
/// A missing file is not an error; defaults are returned so a fresh install
/// starts with sensible behavior.
pub fn load() -> Result<Config> {
    load_from_path(&config_file_path()?)
}

/// Loads the configuration from an explicit directory, e.g. the
/// `--config-dir` CLI override.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    load_from_path(&dir.join(CONFIG_FILE))
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_to_path(config, &config_file_path()?)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_documented_constants() {
        let config = Config::default();
        assert_eq!(config.auto_advance_ms(), DEFAULT_AUTO_ADVANCE_MS);
        assert_eq!(config.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = load_from_path(&dir.path().join(CONFIG_FILE)).expect("load failed");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            carousel: CarouselConfig {
                auto_advance_ms: Some(2500),
                swipe_threshold: Some(30.0),
            },
        };
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded, config);
        assert_eq!(loaded.auto_advance_ms(), 2500);
    }

    #[test]
    fn partial_file_fills_in_section_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"light\"\n").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.auto_advance_ms(), DEFAULT_AUTO_ADVANCE_MS);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "carousel = \"not a table\"").expect("write failed");

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
