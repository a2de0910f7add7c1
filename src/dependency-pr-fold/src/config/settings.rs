//! Fold settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Parsed settings from a `fold.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FoldSettings {
    /// Pretty-print the folded JSON (defaults to true).
    pub pretty_json: bool,

    /// Print a report of every folded message (defaults to false).
    pub report: bool,
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            pretty_json: true,
            report: false,
        }
    }
}

impl FoldSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] if the text is not valid settings.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Loads settings from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading fold settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Loads settings from a file, falling back to defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but can't be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load(path)
    }
}
