// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! Missing keys take their defaults from [`defaults`]; a file that fails to
//! parse yields the default config plus a warning for the caller to log.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[motion]` - Transition durations in milliseconds
//! - `[carousel]` - Keyboard mapping of the image carousel
//!
//! # Path Resolution
//!
//! 1. An explicit path given to `load_from_path()` or `save_to_path()`
//! 2. The `VITRINA_CONFIG_DIR` environment variable
//! 3. `Vitrina/` under the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use vitrina::config::{self, ArrowRightAction};
//!
//! let (mut config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! // Map ArrowRight to "next image"
//! config.carousel.arrow_right = Some(ArrowRightAction::Next);
//!
//! config::save(&config)?;
//! # Ok::<(), vitrina::error::Error>(())
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application folder name under the platform config directory.
pub const APP_NAME: &str = "Vitrina";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "VITRINA_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// What `ArrowRight` does while the carousel is visible.
///
/// The storefront this controller reproduces mapped `ArrowRight` to the
/// previous image. `Previous` keeps that behavior; `Next` corrects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowRightAction {
    #[default]
    Previous,
    Next,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es-MX").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Transition durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    #[serde(default = "default_disclosure_ms", skip_serializing_if = "Option::is_none")]
    pub disclosure_ms: Option<u64>,

    #[serde(default = "default_modal_ms", skip_serializing_if = "Option::is_none")]
    pub modal_ms: Option<u64>,

    #[serde(default = "default_image_fade_ms", skip_serializing_if = "Option::is_none")]
    pub image_fade_ms: Option<u64>,

    #[serde(
        default = "default_sample_request_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub sample_request_delay_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            disclosure_ms: default_disclosure_ms(),
            modal_ms: default_modal_ms(),
            image_fade_ms: default_image_fade_ms(),
            sample_request_delay_ms: default_sample_request_delay_ms(),
        }
    }
}

impl MotionConfig {
    #[must_use]
    pub fn disclosure(&self) -> Duration {
        clamped_millis(self.disclosure_ms, DEFAULT_DISCLOSURE_MS)
    }

    #[must_use]
    pub fn modal(&self) -> Duration {
        clamped_millis(self.modal_ms, DEFAULT_MODAL_MS)
    }

    #[must_use]
    pub fn image_fade(&self) -> Duration {
        clamped_millis(self.image_fade_ms, DEFAULT_IMAGE_FADE_MS)
    }

    #[must_use]
    pub fn sample_request_delay(&self) -> Duration {
        clamped_millis(self.sample_request_delay_ms, DEFAULT_SAMPLE_REQUEST_DELAY_MS)
    }
}

/// Image carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselConfig {
    /// Action bound to the `ArrowRight` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_right: Option<ArrowRightAction>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_disclosure_ms() -> Option<u64> {
    Some(DEFAULT_DISCLOSURE_MS)
}

fn default_modal_ms() -> Option<u64> {
    Some(DEFAULT_MODAL_MS)
}

fn default_image_fade_ms() -> Option<u64> {
    Some(DEFAULT_IMAGE_FADE_MS)
}

fn default_sample_request_delay_ms() -> Option<u64> {
    Some(DEFAULT_SAMPLE_REQUEST_DELAY_MS)
}

fn clamped_millis(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(MAX_MOTION_MS))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the application config directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `VITRINA_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

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
                        Some(format!("{} ({})", err, path.display())),
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
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es-MX".to_string()),
            },
            motion: MotionConfig {
                disclosure_ms: Some(400),
                ..MotionConfig::default()
            },
            carousel: CarouselConfig {
                arrow_right: Some(ArrowRightAction::Next),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.motion, MotionConfig::default());
        assert_eq!(loaded.carousel.arrow_right, None);
    }

    #[test]
    fn arrow_right_parses_kebab_case() {
        let config: Config =
            toml::from_str("[carousel]\narrow_right = \"next\"\n").expect("parse");
        assert_eq!(config.carousel.arrow_right, Some(ArrowRightAction::Next));
        assert_eq!(ArrowRightAction::default(), ArrowRightAction::Previous);
    }

    #[test]
    fn invalid_toml_yields_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|w| w.contains("Config Error")));
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn durations_are_clamped() {
        let motion = MotionConfig {
            disclosure_ms: Some(60_000),
            modal_ms: None,
            image_fade_ms: Some(0),
            sample_request_delay_ms: Some(100),
        };
        assert_eq!(motion.disclosure(), Duration::from_millis(MAX_MOTION_MS));
        assert_eq!(motion.modal(), Duration::from_millis(DEFAULT_MODAL_MS));
        assert_eq!(motion.image_fade(), Duration::ZERO);
        assert_eq!(motion.sample_request_delay(), Duration::from_millis(100));
    }

    #[test]
    fn override_path_takes_precedence() {
        let custom = PathBuf::from("/custom/config");
        assert_eq!(config_dir_with_override(Some(custom.clone())), Some(custom));
    }

    #[test]
    fn env_var_overrides_default_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/tmp/vitrina_test_config";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("vitrina");
        let mut config = Config::default();
        config.carousel.arrow_right = Some(ArrowRightAction::Next);

        save_with_override(&config, Some(base.clone())).expect("failed to save config");

        assert!(base.join(CONFIG_FILE).exists());
        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_follows_env_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let mut config = Config::default();
        config.general.language = Some("es-MX".to_string());
        let saved = save(&config);
        let (loaded, _) = load();

        std::env::remove_var(ENV_CONFIG_DIR);
        saved.expect("failed to save config");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
        assert_eq!(loaded.general.language.as_deref(), Some("es-MX"));
    }

    #[test]
    fn default_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
