//! Changelog entry rewriting.

use std::sync::LazyLock;

use czjira_commit::{BREAKING_CHANGE, ParsedCommit};
use czjira_plugin::{PluginError, PluginResult};
use regex::Regex;
use tracing::debug;

/// Last `[...]` group without nested brackets and with no `[` after it.
/// An empty `[]` is not an identifier and hides any group before it.
static ISSUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<bracket>\[(?P<issue>[^\[\]]+)\])[^\[]*$").expect("invalid regex")
});

/// Metadata key holding the extracted issue identifier.
pub const ISSUE_METADATA_KEY: &str = "issue";

/// Rewrites a changelog entry so its issue identifier links to Jira.
///
/// Returns `Ok(None)` for breaking-change footer entries, which duplicate
/// the breaking commit they came from.
///
/// # Errors
///
/// Returns [`PluginError::MissingIssueIdentifier`] if the message has no
/// `[ISSUE-ID]` group.
pub fn rewrite_entry(
    mut commit: ParsedCommit,
    jira_url: &str,
) -> PluginResult<Option<ParsedCommit>> {
    if commit.is_breaking_change_entry() {
        debug!(hash = %commit.short_hash(), "excluding breaking change footer entry");
        return Ok(None);
    }

    if commit.breaking {
        commit.change_type = BREAKING_CHANGE.to_string();
    }

    let captures = ISSUE_RE
        .captures(&commit.message)
        .ok_or_else(|| PluginError::MissingIssueIdentifier(commit.message.clone()))?;
    let (Some(bracket), Some(issue)) = (captures.name("bracket"), captures.name("issue")) else {
        return Err(PluginError::MissingIssueIdentifier(commit.message.clone()));
    };

    let issue = issue.as_str().to_string();
    let mut stripped = String::with_capacity(commit.message.len());
    stripped.push_str(&commit.message[..bracket.start()]);
    stripped.push_str(&commit.message[bracket.end()..]);

    commit.message = format!(
        "{} [{issue}]({jira_url}/browse/{issue}) ({})",
        stripped.trim(),
        commit.short_hash()
    );
    commit.metadata.insert(ISSUE_METADATA_KEY.to_string(), issue);

    Ok(Some(commit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JIRA_URL: &str = "https://x.atlassian.net";

    fn entry(change_type: &str, message: &str) -> ParsedCommit {
        ParsedCommit::new("abcdef1234567", change_type, message)
    }

    #[test]
    fn test_rewrites_message() {
        let rewritten = rewrite_entry(entry("feat", "fix bug [CZ-42]"), JIRA_URL)
            .unwrap()
            .unwrap();

        assert_eq!(
            rewritten.message,
            "fix bug [CZ-42](https://x.atlassian.net/browse/CZ-42) (abcdef1)"
        );
        assert_eq!(rewritten.change_type, "feat");
        assert_eq!(
            rewritten.metadata.get(ISSUE_METADATA_KEY).map(String::as_str),
            Some("CZ-42")
        );
    }

    #[test]
    fn test_excludes_breaking_change_entries() {
        let result = rewrite_entry(entry(BREAKING_CHANGE, "api removed"), JIRA_URL).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_breaking_entry_moves_to_breaking_section() {
        let commit = entry("feat", "drop v1 api [CZ-7]").with_breaking(true);

        let rewritten = rewrite_entry(commit, JIRA_URL).unwrap().unwrap();
        assert_eq!(rewritten.change_type, BREAKING_CHANGE);
        assert!(rewritten.breaking);
    }

    #[test]
    fn test_uses_last_bracket_group() {
        let rewritten = rewrite_entry(entry("fix", "handle [draft] state [CZ-9]"), JIRA_URL)
            .unwrap()
            .unwrap();
        assert_eq!(
            rewritten.message,
            "handle [draft] state [CZ-9](https://x.atlassian.net/browse/CZ-9) (abcdef1)"
        );
    }

    #[test]
    fn test_keeps_text_after_bracket() {
        let rewritten = rewrite_entry(entry("fix", "handle state [CZ-9] again"), JIRA_URL)
            .unwrap()
            .unwrap();
        assert_eq!(
            rewritten.message,
            "handle state  again [CZ-9](https://x.atlassian.net/browse/CZ-9) (abcdef1)"
        );
    }

    #[test]
    fn test_missing_bracket_is_an_error() {
        let err = rewrite_entry(entry("feat", "no issue here"), JIRA_URL).unwrap_err();
        match err {
            PluginError::MissingIssueIdentifier(message) => assert_eq!(message, "no issue here"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_brackets_are_not_an_identifier() {
        for message in ["something []", "fix [CZ-1] []"] {
            let err = rewrite_entry(entry("feat", message), JIRA_URL).unwrap_err();
            assert!(matches!(err, PluginError::MissingIssueIdentifier(_)), "{message}");
        }
    }

    #[test]
    fn test_short_hash() {
        let commit = ParsedCommit::new("abc", "fix", "tiny [CZ-1]");
        let rewritten = rewrite_entry(commit, JIRA_URL).unwrap().unwrap();
        assert!(rewritten.message.ends_with("(abc)"));
    }
}
