//! Config module - Manages WandrWays configuration (wandrways.toml).
//!
//! Configuration file contains:
//! - Translation provider endpoint and timeout
//! - Geocoding provider endpoint, client identifier and timeout
//!
//! The file is optional. Nothing from a session is ever written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Translation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Base URL of the translate_a API
    #[serde(default = "default_translation_api_base")]
    pub api_base: String,
    /// Language the provider uses for language names (hl parameter)
    #[serde(default = "default_display_language")]
    pub display_language: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_display_language() -> String {
    "en".to_string()
}

fn default_translation_api_base() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_base: default_translation_api_base(),
            display_language: default_display_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Geocoding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim instance
    #[serde(default = "default_geocoding_api_base")]
    pub api_base: String,
    /// Client identifier sent as User-Agent (Nominatim usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_api_base() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "wandrways_app".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_base: default_geocoding_api_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// Main WandrWays configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Translation provider
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Geocoding provider
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

/// Get default config directory (~/.config/wandrways/).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("wandrways"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("wandrways.toml")
}

impl Config {
    /// Load config from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Cannot parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from default path, falling back to defaults when absent.
    pub fn load_default() -> Result<Self> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
