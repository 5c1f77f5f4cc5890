// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's configuration, loaded from a `settings.toml`
//! file.
//!
//! # Configuration Sections
//!
//! - `[locale]` - Bundle resource root, load order, initial/fallback language,
//!   selectable languages
//! - `[header]` - Model selector members and default selection
//!
//! Every field is optional; missing fields take the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use landing_site::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Point the loader at a web server
//! config.locale.resource_root = "https://example.com/static/i18n".to_string();
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::i18n::LanguageCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Locale loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    /// `embedded`, a directory path, or an `http(s)://` base URL.
    #[serde(default = "default_resource_root")]
    pub resource_root: String,

    /// Languages fetched at startup, in order. The last one that loads
    /// becomes active.
    #[serde(default = "default_load_order")]
    pub load_order: Vec<LanguageCode>,

    /// Active language before any bundle has loaded.
    #[serde(default = "default_initial_language")]
    pub initial: LanguageCode,

    /// Language consulted for keys missing from the active bundle.
    #[serde(default = "default_fallback_language")]
    pub fallback: LanguageCode,

    /// Languages offered by the header selector.
    #[serde(default = "default_selectable_languages")]
    pub languages: Vec<LanguageCode>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            load_order: default_load_order(),
            initial: default_initial_language(),
            fallback: default_fallback_language(),
            languages: default_selectable_languages(),
        }
    }
}

/// Header (navigation) settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderConfig {
    /// Models offered by the model selector.
    #[serde(default = "default_members")]
    pub members: Vec<u32>,

    /// Model preselected at mount; need not be one of `members`.
    #[serde(default = "default_model")]
    pub default_model: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            members: default_members(),
            default_model: default_model(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub header: HeaderConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn codes(list: &[&'static str]) -> Vec<LanguageCode> {
    list.iter().copied().map(LanguageCode::from_static).collect()
}

fn default_resource_root() -> String {
    DEFAULT_RESOURCE_ROOT.to_string()
}

fn default_load_order() -> Vec<LanguageCode> {
    codes(&DEFAULT_LOAD_ORDER)
}

fn default_initial_language() -> LanguageCode {
    LanguageCode::from_static(DEFAULT_INITIAL_LANGUAGE)
}

fn default_fallback_language() -> LanguageCode {
    LanguageCode::from_static(DEFAULT_FALLBACK_LANGUAGE)
}

fn default_selectable_languages() -> Vec<LanguageCode> {
    codes(&DEFAULT_SELECTABLE_LANGUAGES)
}

fn default_members() -> Vec<u32> {
    DEFAULT_MEMBERS.to_vec()
}

fn default_model() -> u32 {
    DEFAULT_MODEL_SELECTION
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
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning describing what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
