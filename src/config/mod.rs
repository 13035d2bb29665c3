// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget host's configuration, loaded from and saved
//! to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[endpoint]` - Where and how feedback is submitted
//! - `[wording]` - Per-label overrides of the localized wording
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `THUMBER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use thumber::config;
//!
//! let (mut config, _warning) = config::load();
//! config.endpoint.url = Some("https://example.org/feedback/".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be used.
pub const LOAD_WARNING_KEY: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Feedback endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointConfig {
    /// URL the feedback form posts to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Anti-forgery token forwarded as `csrfmiddlewaretoken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_token: Option<String>,

    /// Address of the page the feedback is about, sent as `Referer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,

    /// Raw `Cookie` header carrying the session and CSRF cookies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    /// Seconds before an unanswered submission counts as failed.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            security_token: None,
            referer: None,
            cookie: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EndpointConfig {
    /// Submission timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

/// Overrides for the widget's labels. `None` keeps the localized default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfied: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thanks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Render "satisfied" before "not satisfied".
    #[serde(
        default = "default_first_option_yes",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_option_yes: Option<bool>,
}

impl Default for WordingConfig {
    fn default() -> Self {
        Self {
            satisfied: None,
            yes: None,
            no: None,
            comment: None,
            comment_placeholder: None,
            submit: None,
            thanks: None,
            error: None,
            first_option_yes: default_first_option_yes(),
        }
    }
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
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub wording: WordingConfig,
}

fn default_timeout_secs() -> Option<u32> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_first_option_yes() -> Option<bool> {
    Some(DEFAULT_FIRST_OPTION_YES)
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
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
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
