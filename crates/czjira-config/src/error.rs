//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// A configuration file exists but has no settings table.
    #[error("missing [tool.commitizen] table in {0}")]
    MissingTable(PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/cz.toml"));
        assert_eq!(err.to_string(), "configuration file not found: /path/to/cz.toml");
    }

    #[test]
    fn test_missing_table_display() {
        let err = ConfigError::MissingTable(PathBuf::from("pyproject.toml"));
        assert_eq!(
            err.to_string(),
            "missing [tool.commitizen] table in pyproject.toml"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = ConfigError::MissingTable(PathBuf::from("cz.toml"));
        let debug = format!("{err:?}");
        assert!(debug.contains("MissingTable"));
    }
}
