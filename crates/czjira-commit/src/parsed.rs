//! Changelog entry produced by parsing a raw commit.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RawCommit;

/// Change type of breaking-change footer entries, and the label of the
/// breaking-change changelog section.
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// One changelog entry. A commit yields one entry for its subject and one
/// per breaking-change footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    pub hash: String,
    /// `feat`, `fix`, ... or [`BREAKING_CHANGE`].
    pub change_type: String,
    pub scope: Option<String>,
    /// Entry text, without the type and scope prefix.
    pub message: String,
    pub breaking: bool,
    /// Values attached while rewriting the entry, such as the issue key.
    pub metadata: BTreeMap<String, String>,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl ParsedCommit {
    /// Creates an entry that is not tied to a commit author or date.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        change_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            change_type: change_type.into(),
            scope: None,
            message: message.into(),
            breaking: false,
            metadata: BTreeMap::new(),
            author: String::new(),
            date: Utc::now(),
        }
    }

    /// Creates an entry carrying the hash, author and date of `raw`.
    #[must_use]
    pub fn from_raw(
        raw: &RawCommit,
        change_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            author: raw.author.clone(),
            date: raw.date,
            ..Self::new(&raw.hash, change_type, message)
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Option<impl Into<String>>) -> Self {
        self.scope = scope.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// True for entries split off a `BREAKING CHANGE:` footer.
    #[must_use]
    pub fn is_breaking_change_entry(&self) -> bool {
        self.change_type == BREAKING_CHANGE
    }

    /// First 7 characters of the hash.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(index, _)| index);
        &self.hash[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_raw_copies_commit_fields() {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let raw = RawCommit::new("0123456789ab", "feat(api): x [CZ-1]", "Ada", date);

        let entry = ParsedCommit::from_raw(&raw, "feat", "x [CZ-1]")
            .with_scope(Some("api"))
            .with_breaking(true);

        assert_eq!(entry.hash, "0123456789ab");
        assert_eq!(entry.author, "Ada");
        assert_eq!(entry.date, date);
        assert_eq!(entry.scope.as_deref(), Some("api"));
        assert_eq!(entry.message, "x [CZ-1]");
        assert!(entry.breaking);
        assert!(entry.metadata.is_empty());
    }

    #[test]
    fn test_without_scope() {
        let entry = ParsedCommit::new("abc", "fix", "y").with_scope(None::<String>);
        assert!(entry.scope.is_none());
        assert!(!entry.breaking);
    }

    #[test]
    fn test_breaking_change_entry() {
        assert!(ParsedCommit::new("abc", BREAKING_CHANGE, "gone").is_breaking_change_entry());

        // A breaking commit is not itself a footer entry.
        let breaking = ParsedCommit::new("abc", "feat", "x").with_breaking(true);
        assert!(!breaking.is_breaking_change_entry());
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(ParsedCommit::new("abcdef1234567", "feat", "").short_hash(), "abcdef1");
        assert_eq!(ParsedCommit::new("abc", "feat", "").short_hash(), "abc");
    }
}
