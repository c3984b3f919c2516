//! Commit as read from the repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unparsed commit: hash, full message, author name and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl RawCommit {
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: author.into(),
            date,
        }
    }

    /// The first line of the message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Everything after the subject line, trimmed; `None` when blank.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.message
            .split_once('\n')
            .map(|(_, rest)| rest.trim())
            .filter(|body| !body.is_empty())
    }

    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}
