//! Sectioned Markdown changelog formatter plugin.

use std::collections::BTreeMap;
use std::fmt::Write;

use czjira_commit::{BREAKING_CHANGE, ParsedCommit};
use czjira_plugin::{ChangelogFormatter, Plugin, Release, SectionConfig};

/// Markdown formatter grouping entries by change-type section.
///
/// Entries whose change type has no section label are left out.
pub struct SectionsFormatter;

impl SectionsFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the section label for a change type.
    fn section_label<'a>(change_type: &'a str, config: &'a SectionConfig) -> Option<&'a str> {
        if change_type == BREAKING_CHANGE {
            return Some(BREAKING_CHANGE);
        }
        config.change_type_map.get(change_type).map(String::as_str)
    }

    /// Groups entries by section label, keeping entry order.
    fn group<'a>(
        commits: &'a [ParsedCommit],
        config: &'a SectionConfig,
    ) -> BTreeMap<&'a str, Vec<&'a ParsedCommit>> {
        let mut groups: BTreeMap<&str, Vec<&ParsedCommit>> = BTreeMap::new();

        for commit in commits {
            if let Some(label) = Self::section_label(&commit.change_type, config) {
                groups.entry(label).or_default().push(commit);
            }
        }

        groups
    }

    fn write_section(output: &mut String, label: &str, commits: &[&ParsedCommit]) {
        _ = writeln!(output, "### {label}\n");

        for commit in commits {
            match &commit.scope {
                Some(scope) => {
                    _ = writeln!(output, "- **{scope}**: {}", commit.message);
                }
                None => {
                    _ = writeln!(output, "- {}", commit.message);
                }
            }
        }

        output.push('\n');
    }
}

impl Default for SectionsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SectionsFormatter {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Formats changelog sections from a change type map and order"
    }
}

impl ChangelogFormatter for SectionsFormatter {
    fn format(&self, release: &Release, config: &SectionConfig) -> String {
        let mut output = String::new();

        match &release.version {
            Some(version) => {
                let date = release.date.format("%Y-%m-%d");
                _ = writeln!(output, "## {version} ({date})\n");
            }
            None => {
                _ = writeln!(output, "## Unreleased\n");
            }
        }

        let mut groups = Self::group(&release.commits, config);

        for label in &config.change_type_order {
            if let Some(commits) = groups.remove(label.as_str()) {
                Self::write_section(&mut output, label, &commits);
            }
        }

        // Labels missing from the order come last, alphabetically.
        for (label, commits) in &groups {
            Self::write_section(&mut output, label, commits);
        }

        output.truncate(output.trim_end().len());
        output.push('\n');
        output
    }
}
