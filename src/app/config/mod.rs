// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Grid layout settings
//! - `[slider]` - Fullscreen slider behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::slider::EdgeBehavior;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of columns in the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: Some(DEFAULT_GRID_COLUMNS),
        }
    }
}

/// Fullscreen slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Policy when navigating past the first or last image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_behavior: Option<EdgeBehavior>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            edge_behavior: Some(EdgeBehavior::default()),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery grid settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Fullscreen slider settings.
    #[serde(default)]
    pub slider: SliderConfig,
}

impl Config {
    /// Effective grid column count, clamped into the supported range so a
    /// hand-edited config cannot request a degenerate layout.
    pub fn grid_columns(&self) -> u32 {
        self.gallery
            .columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Effective slider edge policy.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.slider.edge_behavior.unwrap_or_default()
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    if let Some(path) = get_config_path_with_override(base_dir) {
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
    fn default_config_uses_block_edge_behavior() {
        let config = Config::default();
        assert_eq!(config.edge_behavior(), EdgeBehavior::Block);
    }

    #[test]
    fn default_config_uses_default_columns() {
        let config = Config::default();
        assert_eq!(config.grid_columns(), DEFAULT_GRID_COLUMNS);
    }

    #[test]
    fn grid_columns_are_clamped() {
        let mut config = Config::default();
        config.gallery.columns = Some(0);
        assert_eq!(config.grid_columns(), MIN_GRID_COLUMNS);

        config.gallery.columns = Some(50);
        assert_eq!(config.grid_columns(), MAX_GRID_COLUMNS);
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.gallery.columns = Some(4);
        config.slider.edge_behavior = Some(EdgeBehavior::WrapAround);

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn edge_behavior_parses_kebab_case_value() {
        let content = "[slider]\nedge_behavior = \"wrap-around\"\n";
        let config: Config = toml::from_str(content).expect("parse config");
        assert_eq!(config.edge_behavior(), EdgeBehavior::WrapAround);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_returns_warning_for_corrupt_file() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("settings.toml"), "not [valid toml").expect("write file");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning, Some("notification-config-load-error".to_string()));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let dir = tempdir().expect("create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("a").join("b");

        save_with_override(&Config::default(), Some(nested.clone())).expect("save config");
        assert!(nested.join(CONFIG_FILE).exists());
    }
}
