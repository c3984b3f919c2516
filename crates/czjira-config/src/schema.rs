//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Layout of a configuration file; only the `[tool.commitizen]` table matters.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ToolTable {
    pub commitizen: Option<Settings>,
}

/// The `[tool.commitizen]` settings table.
///
/// Every key is optional here. Unknown keys (`name`, `version`, ...) belong to
/// the host and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the Jira instance (e.g. `https://acme.atlassian.net`).
    #[serde(default)]
    pub jira_url: Option<String>,

    /// Default Jira project key (e.g. `CZ`).
    #[serde(default)]
    pub jira_project_key: Option<String>,

    /// Commit types offered by the type question.
    #[serde(default)]
    pub commit_types: Option<Vec<CommitTypeSetting>>,

    /// Minimum length of the commit title.
    #[serde(default)]
    pub commit_message_minimum_length: Option<usize>,

    /// Change type to changelog section label.
    #[serde(default)]
    pub change_type_map: Option<BTreeMap<String, String>>,

    /// Order of changelog sections, by label.
    #[serde(default)]
    pub change_type_order: Option<Vec<String>>,

    /// Change type to increment (`MAJOR`, `MINOR`, `PATCH`).
    #[serde(default)]
    pub bump_map: Option<BTreeMap<String, String>>,

    /// Prompt style attributes handed to the host's prompt renderer.
    #[serde(default)]
    pub prompt_style: Option<Vec<PromptStyleSetting>>,
}

/// A selectable commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTypeSetting {
    /// Value written into the commit message.
    pub value: String,

    /// Label shown in the selection list.
    #[serde(alias = "display")]
    pub name: String,
}

/// One prompt style attribute, e.g. `qmark` -> `fg:#FF5555`.
///
/// Accepts either a `{ name, value }` table or a `[name, value]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PromptStyleRepr")]
pub struct PromptStyleSetting {
    /// Style token name.
    pub name: String,

    /// Style definition.
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PromptStyleRepr {
    Pair(String, String),
    Table { name: String, value: String },
}

impl From<PromptStyleRepr> for PromptStyleSetting {
    fn from(repr: PromptStyleRepr) -> Self {
        match repr {
            PromptStyleRepr::Pair(name, value) | PromptStyleRepr::Table { name, value } => {
                Self { name, value }
            }
        }
    }
}
