//! Configuration schema for xedcache
//!
//! Configuration is stored at `~/.config/xedcache/config.toml`

use crate::cache::KeyScheme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Host environment settings
    pub environment: EnvironmentConfig,

    /// Cache settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Host environment configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Permanent storage root; the platform data directory when unset
    pub permanent_dir: Option<PathBuf>,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the core extension cache (default: true)
    pub enabled: bool,

    /// How cache file names are derived from descriptor URLs
    pub key_scheme: KeyScheme,

    /// Pretty-print stored descriptors
    pub pretty: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            key_scheme: KeyScheme::Sha256,
            pretty: false,
        }
    }
}
