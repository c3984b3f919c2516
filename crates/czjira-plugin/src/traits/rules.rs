//! Commit rules trait.

use czjira_commit::{AnswerSet, ParsedCommit};

use super::Plugin;
use crate::{PluginResult, Question};

/// Defines how commit messages are asked for, rendered and post-processed.
pub trait CommitRules: Plugin {
    /// Returns the ordered questions whose answers feed [`Self::message`].
    fn questions(&self) -> Vec<Question>;

    /// Renders the commit message from validated answers.
    fn message(&self, answers: &AnswerSet) -> String;

    /// Rewrites one parsed commit before it lands in the changelog.
    ///
    /// `Ok(None)` excludes the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry violates the rules' message format.
    fn changelog_message_hook(&self, commit: ParsedCommit) -> PluginResult<Option<ParsedCommit>> {
        Ok(Some(commit))
    }

    /// Returns an example message.
    fn example(&self) -> &'static str {
        ""
    }

    /// Returns the message schema.
    fn schema(&self) -> &'static str {
        ""
    }

    /// Returns an explanation of the rules.
    fn info(&self) -> &'static str {
        ""
    }
}
