//! Editorial limits - the configurable bounds enforced by validators.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading a limits file.
#[derive(Debug, Error)]
pub enum LimitsError {
    #[error("failed to read limits file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse limits file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Length and range bounds for content fields.
///
/// Limits count characters, not bytes, so multi-byte titles are measured the
/// way an editor would count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum article title length.
    pub max_title_length: usize,
    /// Maximum product name length.
    pub max_name_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            max_name_length: 50,
        }
    }
}

impl ValidationLimits {
    /// Parse limits from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, LimitsError> {
        Ok(toml::from_str(input)?)
    }

    /// Load limits from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LimitsError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.max_title_length, 100);
        assert_eq!(limits.max_name_length, 50);
    }

    #[test]
    fn test_parse_full_document() {
        let limits = ValidationLimits::from_toml_str(
            "max_title_length = 80\nmax_name_length = 40\n",
        )
        .unwrap();
        assert_eq!(limits.max_title_length, 80);
        assert_eq!(limits.max_name_length, 40);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let limits = ValidationLimits::from_toml_str("max_title_length = 64\n").unwrap();
        assert_eq!(limits.max_title_length, 64);
        assert_eq!(limits.max_name_length, 50);
    }

    #[test]
    fn test_empty_document_is_defaults() {
        let limits = ValidationLimits::from_toml_str("").unwrap();
        assert_eq!(limits, ValidationLimits::default());
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let err = ValidationLimits::from_toml_str("max_title_length = \"tall\"").unwrap_err();
        assert!(matches!(err, LimitsError::Parse(_)));
    }
}
