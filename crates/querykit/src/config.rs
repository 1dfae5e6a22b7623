//! # Configuration
//!
//! Query limits are managed by [`confique`], which layers values from the
//! environment, a TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `QUERYKIT_DEFAULT_PAGE_SIZE`, `QUERYKIT_MAX_PAGE_SIZE`, ...
//! 2. **Config file**: the TOML file passed to [`QueryConfig::load`], if it exists.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_page_size` | `10` | Page size when a request names none |
//! | `max_page_size` | `100` | Largest page size a request may ask for |
//! | `max_key_length` | `128` | Longest external id or group label |
//! | `max_keyword_length` | `256` | Longest search keyword |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{FieldError, ValidationErrors};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    #[config(default = 10, env = "QUERYKIT_DEFAULT_PAGE_SIZE")]
    pub default_page_size: usize,

    #[config(default = 100, env = "QUERYKIT_MAX_PAGE_SIZE")]
    pub max_page_size: usize,

    #[config(default = 128, env = "QUERYKIT_MAX_KEY_LENGTH")]
    pub max_key_length: usize,

    #[config(default = 256, env = "QUERYKIT_MAX_KEYWORD_LENGTH")]
    pub max_keyword_length: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            max_key_length: 128,
            max_keyword_length: 256,
        }
    }
}

impl QueryConfig {
    /// Load from the environment and, when given, a TOML file. A missing file
    /// is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.check()?;
        Ok(config)
    }

    /// Reject limits that would make every request invalid.
    pub fn check(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        if self.max_page_size == 0 {
            errors.push(FieldError::new("max_page_size", "must be greater than 0"));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            errors.push(FieldError::new(
                "default_page_size",
                format!("must be between 1 and {}", self.max_page_size),
            ));
        }
        if self.max_key_length == 0 {
            errors.push(FieldError::new("max_key_length", "must be greater than 0"));
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querykit.toml");
        fs::write(&path, "max_page_size = 50\ndefault_page_size = 25\n").unwrap();

        let config = QueryConfig::load(Some(&path)).unwrap();
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_key_length, 128);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = QueryConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, QueryConfig::default());
    }

    #[test]
    fn test_inconsistent_limits_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querykit.toml");
        fs::write(&path, "max_page_size = 5\ndefault_page_size = 20\n").unwrap();

        let err = QueryConfig::load(Some(&path)).unwrap_err();
        let fields: Vec<&str> = err
            .field_errors()
            .unwrap()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["default_page_size"]);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querykit.toml");
        fs::write(&path, "max_page_size = \"lots\"\n").unwrap();

        let err = QueryConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, crate::error::QueryError::Config(_)));
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let text = toml::to_string(&QueryConfig::default()).unwrap();
        assert!(text.contains("max_page_size = 100"));
    }
}
