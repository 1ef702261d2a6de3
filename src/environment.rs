//! Host environment abstraction
//!
//! The cache never decides where permanent data lives; it asks an
//! [`Environment`] once at construction time. No directory means no cache.

use crate::config::{Config, ConfigManager};
use std::path::PathBuf;
use tracing::debug;

/// Provides the permanent storage root of the running application
pub trait Environment {
    /// Directory that survives restarts, or `None` when there is none
    fn permanent_directory(&self) -> Option<PathBuf>;
}

/// Environment with an explicitly chosen directory
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    permanent_dir: Option<PathBuf>,
}

impl FixedEnvironment {
    /// Environment rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            permanent_dir: Some(dir.into()),
        }
    }

    /// Environment without any permanent directory
    pub fn none() -> Self {
        Self::default()
    }
}

impl Environment for FixedEnvironment {
    fn permanent_directory(&self) -> Option<PathBuf> {
        self.permanent_dir.clone()
    }
}

/// Environment derived from the loaded configuration
#[derive(Debug, Clone)]
pub struct ConfiguredEnvironment {
    permanent_dir: Option<PathBuf>,
}

impl ConfiguredEnvironment {
    /// Resolve the permanent directory from `config`
    ///
    /// A disabled cache reports no directory. Otherwise the configured
    /// directory wins over the platform default.
    pub fn from_config(config: &Config) -> Self {
        let permanent_dir = if !config.cache.enabled {
            debug!("Cache disabled in configuration");
            None
        } else {
            config
                .environment
                .permanent_dir
                .clone()
                .or_else(ConfigManager::default_permanent_dir)
        };

        Self { permanent_dir }
    }
}

impl Environment for ConfiguredEnvironment {
    fn permanent_directory(&self) -> Option<PathBuf> {
        self.permanent_dir.clone()
    }
}
