//! Directory configuration
//!
//! Loaded from TOML. Every key is optional and falls back to the
//! compatible default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Configuration for an [`InMemoryDirectory`](crate::InMemoryDirectory)
///
/// # Examples
///
/// ```
/// use roster_store::DirectoryConfig;
///
/// // Default: caller-supplied identifiers are never checked
/// let config = DirectoryConfig::default();
/// assert!(!config.reject_duplicate_ids);
///
/// // Strict: re-using an identifier fails
/// let config = DirectoryConfig::strict();
/// assert!(config.reject_duplicate_ids);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Fail `create` when a supplied identifier is already stored
    /// Default: false (duplicates are accepted and lookups return the earliest)
    pub reject_duplicate_ids: bool,
}

impl DirectoryConfig {
    /// Create a strict configuration (duplicate identifiers rejected)
    pub fn strict() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
