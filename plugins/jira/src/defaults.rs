//! Built-in defaults used when a setting is absent.

use std::collections::BTreeMap;

use czjira_commit::BREAKING_CHANGE;
use czjira_config::{CommitTypeSetting, PromptStyleSetting};
use czjira_plugin::BumpType;

/// Minimum commit title length when none is configured.
pub const DEFAULT_MINIMUM_LENGTH: usize = 32;

const COMMIT_TYPES: [(&str, &str); 11] = [
    ("init", "init: initial commit to set up your repository"),
    ("feat", "feat: introduce a new feature"),
    ("fix", "fix: fix a bug"),
    ("docs", "docs: add or update documentation"),
    ("typo", "typo: fix typos"),
    ("refactor", "refactor: code refactoring"),
    ("perf", "perf: code refactoring that improves performance"),
    ("delete", "delete: code or file deletion"),
    ("test", "test: add or update tests"),
    (
        "misc",
        "misc: changes that do not affect the code itself (e.g.: add .gitignore)",
    ),
    (
        "style",
        "style: changes on code styling (e.g.: formatting, white-spaces)",
    ),
];

const PROMPT_STYLE: [(&str, &str); 10] = [
    ("qmark", "fg:#FF5555"),
    ("question", "fg:#BD93F9"),
    ("answer", "fg:#F8F8F2 nobold"),
    ("pointer", "fg:#50FA7B nobold"),
    ("highlighted", "fg:#50FA7B"),
    ("selected", "fg:#50FA7B"),
    ("separator", "fg:#858585"),
    ("instruction", "fg:#858585 nobold"),
    ("text", "fg:#F8F8F2"),
    ("disabled", "fg:#858585 italic"),
];

const BUMP_MAP: [(&str, BumpType); 10] = [
    ("feat", BumpType::Minor),
    ("fix", BumpType::Patch),
    ("perf", BumpType::Patch),
    ("refactor", BumpType::Patch),
    ("delete", BumpType::Major),
    ("docs", BumpType::Patch),
    ("typo", BumpType::Patch),
    ("test", BumpType::Patch),
    ("style", BumpType::Patch),
    ("misc", BumpType::Patch),
];

// Section order follows this table.
const CHANGE_TYPES: [(&str, &str); 10] = [
    ("feat", "New features"),
    ("fix", "Bug fixes"),
    ("perf", "Performance improvements"),
    ("refactor", "Code refactoring"),
    ("delete", "Code or file deletions"),
    ("docs", "Documentation updates"),
    ("typo", "Typographical corrections"),
    ("test", "Test additions or updates"),
    ("style", "Code style and formatting"),
    ("misc", "Miscellaneous"),
];

/// Fallback values for every optional setting.
///
/// Passed to the plugin at construction; [`Defaults::builtin`] gives the
/// stock tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub commit_types: Vec<CommitTypeSetting>,
    pub prompt_style: Vec<PromptStyleSetting>,
    pub minimum_length: usize,
    pub bump_map: BTreeMap<String, BumpType>,
    pub change_type_map: BTreeMap<String, String>,
    pub change_type_order: Vec<String>,
}

impl Defaults {
    /// Returns the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        let commit_types = COMMIT_TYPES
            .iter()
            .map(|(value, name)| CommitTypeSetting {
                value: (*value).to_string(),
                name: (*name).to_string(),
            })
            .collect();

        let prompt_style = PROMPT_STYLE
            .iter()
            .map(|(name, value)| PromptStyleSetting {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect();

        let bump_map = BUMP_MAP
            .iter()
            .map(|(change_type, bump)| ((*change_type).to_string(), *bump))
            .collect();

        let change_type_map = CHANGE_TYPES
            .iter()
            .map(|(change_type, label)| ((*change_type).to_string(), (*label).to_string()))
            .collect();

        let change_type_order = std::iter::once(BREAKING_CHANGE)
            .chain(CHANGE_TYPES.iter().map(|(_, label)| *label))
            .map(String::from)
            .collect();

        Self {
            commit_types,
            prompt_style,
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            bump_map,
            change_type_map,
            change_type_order,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::builtin()
    }
}
