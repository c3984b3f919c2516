//! Commit parser trait.

use czjira_commit::{ParsedCommit, RawCommit};

use super::Plugin;

/// Parses raw commit messages into changelog entries.
pub trait CommitParser: Plugin {
    /// Parses a raw commit.
    ///
    /// One commit may yield several entries (e.g. one per breaking-change
    /// footer). An empty vector means the message does not match the
    /// expected format.
    fn parse(&self, raw: &RawCommit) -> Vec<ParsedCommit>;

    /// Returns whether this parser can handle the given commit.
    fn can_parse(&self, raw: &RawCommit) -> bool {
        !self.parse(raw).is_empty()
    }
}
