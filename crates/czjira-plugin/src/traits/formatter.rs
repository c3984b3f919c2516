//! Changelog formatter trait.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use czjira_commit::ParsedCommit;
use semver::Version;
use serde::{Deserialize, Serialize};

use super::Plugin;

/// A release to be formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// The release version, `None` for unreleased changes.
    pub version: Option<Version>,

    /// The release date.
    pub date: DateTime<Utc>,

    /// The changelog entries in this release.
    pub commits: Vec<ParsedCommit>,
}

impl Release {
    /// Creates a new release.
    #[must_use]
    pub fn new(version: Version, date: DateTime<Utc>, commits: Vec<ParsedCommit>) -> Self {
        Self {
            version: Some(version),
            date,
            commits,
        }
    }

    /// Creates a release for changes not tagged yet.
    #[must_use]
    pub fn unreleased(date: DateTime<Utc>, commits: Vec<ParsedCommit>) -> Self {
        Self {
            version: None,
            date,
            commits,
        }
    }
}

/// How entries are grouped into changelog sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Change type to section label (e.g. `feat` -> `New features`).
    pub change_type_map: BTreeMap<String, String>,

    /// Section labels in output order.
    pub change_type_order: Vec<String>,
}

/// Formats changelog output.
pub trait ChangelogFormatter: Plugin {
    /// Formats a release into a changelog string.
    fn format(&self, release: &Release, config: &SectionConfig) -> String;

    /// Returns the file extension for the output (e.g., "md").
    fn extension(&self) -> &'static str {
        "md"
    }
}
