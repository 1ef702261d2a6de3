//! Error types for xedcache
//!
//! All modules use `XedResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xedcache operations
pub type XedResult<T> = Result<T, XedError>;

/// All errors that can occur in xedcache
#[derive(Error, Debug)]
pub enum XedError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Descriptor errors
    #[error("Invalid descriptor URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to read descriptor {path}: {reason}")]
    DescriptorRead { path: PathBuf, reason: String },

    // Cache errors
    #[error("Core extension cache is disabled (no permanent directory)")]
    CacheDisabled,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl XedError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheDisabled => {
                Some("Set environment.permanent_dir and cache.enabled = true in the config")
            }
            Self::InvalidUrl { .. } => Some("Use an absolute URL, e.g. file:///path/to/extension.xed"),
            Self::ConfigInvalid { .. } => Some("Run: xedcache config init --force"),
            _ => None,
        }
    }
}
