//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A mandatory setting is missing.
    #[error("Config `{0}` is required.")]
    RequiredConfig(&'static str),

    /// A setting is present but has an unusable value.
    #[error("{0}")]
    IncorrectConfig(String),

    /// A changelog message carries no `[ISSUE-ID]` group.
    #[error("no issue identifier found in commit message: {0:?}")]
    MissingIssueIdentifier(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
