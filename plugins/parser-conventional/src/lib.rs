//! Conventional Commits parser plugin.

use std::sync::LazyLock;

use czjira_commit::{BREAKING_CHANGE, ParsedCommit, RawCommit};
use czjira_plugin::{CommitParser, Plugin};
use regex::Regex;
use tracing::debug;

static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<message>.+)$")
        .expect("invalid regex")
});

static BREAKING_FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^BREAKING[- ]CHANGE(?::\s*(?P<message>.*))?").expect("invalid regex")
});

/// Conventional Commits parser.
///
/// Yields one entry per commit plus one `BREAKING CHANGE` entry per
/// `BREAKING CHANGE: text` footer line.
pub struct ConventionalParser;

impl ConventionalParser {
    /// Creates a new conventional parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConventionalParser {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Parses Conventional Commits format"
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, raw: &RawCommit) -> Vec<ParsedCommit> {
        let Some(captures) = SUBJECT_RE.captures(raw.subject()) else {
            debug!(hash = %raw.short_hash(), subject = %raw.subject(), "not a conventional commit");
            return Vec::new();
        };
        let (Some(commit_type), Some(message)) = (captures.name("type"), captures.name("message"))
        else {
            return Vec::new();
        };

        let footers: Vec<Option<&str>> = raw
            .body()
            .into_iter()
            .flat_map(str::lines)
            .filter_map(|line| BREAKING_FOOTER_RE.captures(line.trim_start()))
            .map(|footer| footer.name("message").map(|m| m.as_str().trim()))
            .collect();

        let breaking = captures.name("breaking").is_some() || !footers.is_empty();

        let mut entries = vec![
            ParsedCommit::from_raw(raw, commit_type.as_str(), message.as_str())
                .with_scope(captures.name("scope").map(|scope| scope.as_str()))
                .with_breaking(breaking),
        ];

        entries.extend(
            footers
                .into_iter()
                .flatten()
                .filter(|text| !text.is_empty())
                .map(|text| {
                    ParsedCommit::from_raw(raw, BREAKING_CHANGE, text).with_breaking(true)
                }),
        );

        entries
    }
}
