// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Processing endpoint and request timeout
//! - `[viewer]` - Wheel zoom sensitivity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_COMPARE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

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
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Processing service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Full URL of the processing endpoint.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Endpoint to post images to, falling back to the built-in default.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Viewer gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Scale change per pixel of wheel delta.
    #[serde(
        default = "default_zoom_sensitivity",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_sensitivity: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: default_zoom_sensitivity(),
        }
    }
}

impl ViewerConfig {
    /// Zoom sensitivity clamped to the supported range.
    #[must_use]
    pub fn zoom_sensitivity(&self) -> f32 {
        clamp_zoom_sensitivity(self.zoom_sensitivity.unwrap_or(DEFAULT_ZOOM_SENSITIVITY))
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Keeps persisted sensitivities inside the supported range so a config file
/// cannot make the wheel unusable.
#[must_use]
pub fn clamp_zoom_sensitivity(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_ZOOM_SENSITIVITY, MAX_ZOOM_SENSITIVITY)
    } else {
        DEFAULT_ZOOM_SENSITIVITY
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_ENDPOINT.to_string())
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_zoom_sensitivity() -> Option<f32> {
    Some(DEFAULT_ZOOM_SENSITIVITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
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
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            service: ServiceConfig {
                endpoint: Some("http://192.168.1.20:5000/api/process-image".to_string()),
                timeout_secs: Some(30),
            },
            viewer: ViewerConfig {
                zoom_sensitivity: Some(0.02),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.service.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(
            config.service.timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(config.viewer.zoom_sensitivity(), DEFAULT_ZOOM_SENSITIVITY);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[service]
endpoint = "https://enhance.example.org/api/process-image"
"#,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");

        assert_eq!(
            loaded.service.endpoint(),
            "https://enhance.example.org/api/process-image"
        );
        assert_eq!(loaded.service.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.viewer, ViewerConfig::default());
    }

    #[test]
    fn blank_endpoint_falls_back_to_default() {
        let service = ServiceConfig {
            endpoint: Some("   ".to_string()),
            ..ServiceConfig::default()
        };
        assert_eq!(service.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn timeout_is_clamped() {
        let short = ServiceConfig {
            timeout_secs: Some(0),
            ..ServiceConfig::default()
        };
        assert_eq!(short.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));

        let long = ServiceConfig {
            timeout_secs: Some(86_400),
            ..ServiceConfig::default()
        };
        assert_eq!(long.timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));
    }

    #[test]
    fn zoom_sensitivity_is_clamped() {
        assert_eq!(clamp_zoom_sensitivity(5.0), MAX_ZOOM_SENSITIVITY);
        assert_eq!(clamp_zoom_sensitivity(0.0), MIN_ZOOM_SENSITIVITY);
        assert_eq!(clamp_zoom_sensitivity(f32::NAN), DEFAULT_ZOOM_SENSITIVITY);
        assert_eq!(clamp_zoom_sensitivity(0.02), 0.02);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
[general]
theme_mode = "sepia"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[general]"));
        assert!(content.contains("[service]"));
        assert!(content.contains("[viewer]"));
    }
}
