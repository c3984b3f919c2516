//! Jira-aware commit rules plugin.
//!
//! Asks for Jira issue numbers alongside the usual commit fields, renders
//! them into `type(scope)!: title [KEY-123]` messages and links issue keys
//! to Jira in the changelog.

mod changelog;
mod config;
mod defaults;
pub mod fields;
mod message;

use std::collections::BTreeMap;

use czjira_commit::{AnswerSet, ParsedCommit};
use czjira_config::{PromptStyleSetting, Settings};
use czjira_plugin::validators::{all_of, integer, integer_list, minimum_length, required};
use czjira_plugin::{
    BumpType, Choice, CommitRules, Plugin, PluginResult, Question, QuestionKind, SectionConfig,
};

pub use changelog::{ISSUE_METADATA_KEY, rewrite_entry};
pub use config::JiraConfig;
pub use defaults::{DEFAULT_MINIMUM_LENGTH, Defaults};
pub use message::format_message;

const MULTIPLE_ITEMS_INSTRUCTION: &str =
    "if more than one, use comma to separate them. (press [enter] to skip)";
const MULTILINE_INSTRUCTION: &str =
    "(press [enter] to insert a new line OR [alt + enter] to finish)";
const SELECT_INSTRUCTION: &str = "(use arrow keys to select and press [enter])";

const EXAMPLE: &str = "\
feat(api)!: create user endpoint [CZ-1032]

BREAKING CHANGE: users are now created through /v2/users

issue epic: [CZ-959]
issue subtasks: [CZ-1033, CZ-1034]
issue related tasks: [CZ-1005]";

const SCHEMA: &str = "\
<type>(<scope>)!: <title> [<project key>-<issue number>]
<BLANK LINE>
BREAKING CHANGE: <description>
<BLANK LINE>
issue epic: [<project key>-<epic number>]
issue subtasks: [<project key>-<subtask number>, ...]
issue related tasks: [<project key>-<task number>, ...]
<BLANK LINE>
<footer>";

const INFO: &str = "\
Every commit references the Jira issue it belongs to. The subject line ends \
with the issue key in brackets, and optional blocks reference the epic, \
subtasks and related tasks. When the changelog is generated, the issue key \
of each entry becomes a link to the issue in Jira, followed by the short \
commit hash.";

/// Jira commit rules.
#[derive(Debug, Clone)]
pub struct JiraPlugin {
    config: JiraConfig,
}

impl JiraPlugin {
    /// Creates the plugin from settings over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `jira_url` is missing or a setting is malformed.
    pub fn new(settings: &Settings) -> PluginResult<Self> {
        Self::with_defaults(settings, Defaults::builtin())
    }

    /// Creates the plugin from settings over caller-supplied defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `jira_url` is missing or a setting is malformed.
    pub fn with_defaults(settings: &Settings, defaults: Defaults) -> PluginResult<Self> {
        let config = JiraConfig::resolve(settings, defaults)?;
        Ok(Self { config })
    }

    /// Returns the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    #[must_use]
    pub fn prompt_style(&self) -> &[PromptStyleSetting] {
        &self.config.prompt_style
    }

    #[must_use]
    pub fn bump_map(&self) -> &BTreeMap<String, BumpType> {
        &self.config.bump_map
    }

    #[must_use]
    pub fn change_type_map(&self) -> &BTreeMap<String, String> {
        &self.config.change_type_map
    }

    #[must_use]
    pub fn change_type_order(&self) -> &[String] {
        &self.config.change_type_order
    }

    /// Returns the changelog section layout.
    #[must_use]
    pub fn section_config(&self) -> SectionConfig {
        SectionConfig {
            change_type_map: self.config.change_type_map.clone(),
            change_type_order: self.config.change_type_order.clone(),
        }
    }

    /// Returns the question for a field, if it exists.
    #[must_use]
    pub fn question(&self, name: &str) -> Option<Question> {
        self.questions().into_iter().find(|q| q.name == name)
    }

    fn project_key_question(&self) -> Question {
        let question = Question::new(
            fields::JIRA_PROJECT_KEY,
            QuestionKind::Input,
            "What's the jira project key?",
        );

        match &self.config.project_key {
            Some(key) => question.instruction(format!("(default: {key})")),
            None => question.required(true).validator(required()),
        }
    }
}

impl Plugin for JiraPlugin {
    fn name(&self) -> &'static str {
        "jira"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Commit rules with Jira issue references"
    }
}

impl CommitRules for JiraPlugin {
    fn questions(&self) -> Vec<Question> {
        let commit_types = self
            .config
            .commit_types
            .iter()
            .map(|commit_type| Choice {
                value: commit_type.value.clone(),
                name: commit_type.name.clone(),
            })
            .collect();

        vec![
            self.project_key_question(),
            Question::new(
                fields::ISSUE_EPIC_NUMBER,
                QuestionKind::Input,
                "Issue epic number:",
            )
            .validator(integer()),
            Question::new(fields::ISSUE_NUMBER, QuestionKind::Input, "Issue number:")
                .required(true)
                .validator(all_of(vec![required(), integer()])),
            Question::new(
                fields::ISSUE_SUBTASKS,
                QuestionKind::Input,
                "Issue subtask number:",
            )
            .instruction(MULTIPLE_ITEMS_INSTRUCTION)
            .validator(integer_list()),
            Question::new(
                fields::ISSUE_RELATED_TASKS,
                QuestionKind::Input,
                "Issue related task number:",
            )
            .instruction(MULTIPLE_ITEMS_INSTRUCTION)
            .validator(integer_list()),
            Question::new(
                fields::COMMIT_TYPE,
                QuestionKind::Select,
                "Select the commit type:",
            )
            .instruction(SELECT_INSTRUCTION)
            .choices(commit_types),
            Question::new(fields::COMMIT_SCOPE, QuestionKind::Input, "Commit scope:")
                .instruction("(press [enter] to skip)"),
            Question::new(fields::COMMIT_TITLE, QuestionKind::Input, "Commit title:")
                .required(true)
                .validator(all_of(vec![
                    required(),
                    minimum_length(self.config.minimum_length),
                ])),
            Question::new(
                fields::COMMIT_DESCRIPTION,
                QuestionKind::Multiline,
                "Commit description:",
            )
            .instruction(MULTILINE_INSTRUCTION),
            Question::new(
                fields::IS_BREAKING_CHANGE,
                QuestionKind::Confirm,
                "Is this a BREAKING CHANGE?",
            )
            .default_answer(false),
            Question::new(fields::FOOTER, QuestionKind::Input, "Footer:")
                .instruction("(press [enter] to skip)"),
        ]
    }

    fn message(&self, answers: &AnswerSet) -> String {
        format_message(answers, &self.config)
    }

    fn changelog_message_hook(&self, commit: ParsedCommit) -> PluginResult<Option<ParsedCommit>> {
        rewrite_entry(commit, &self.config.jira_url)
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn schema(&self) -> &'static str {
        SCHEMA
    }

    fn info(&self) -> &'static str {
        INFO
    }
}
