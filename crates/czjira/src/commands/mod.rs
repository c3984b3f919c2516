//! Subcommands.

pub mod bump;
pub mod changelog;
pub mod info;
pub mod message;
pub mod questions;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use czjira_commit::{ParsedCommit, RawCommit};
use czjira_config::{Settings, find_and_load_config, load_config};
use czjira_git::Repository;
use czjira_jira::JiraPlugin;
use czjira_plugin::{CommitParser, Plugin};

/// Loads settings from `path`, or discovers them from the current directory.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => find_and_load_config().context("failed to load configuration"),
    }
}

/// Builds the commit rules from the configuration.
pub fn load_plugin(path: Option<&Path>) -> Result<JiraPlugin> {
    let settings = load_settings(path)?;
    let plugin = JiraPlugin::new(&settings).context("invalid configuration")?;
    debug!(
        plugin = plugin.name(),
        version = plugin.version(),
        description = plugin.description(),
        "loaded commit rules"
    );
    Ok(plugin)
}

/// Opens the repository enclosing the current directory.
pub fn open_repository() -> Result<Repository> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let repo = Repository::discover(&cwd).context("failed to open git repository")?;
    debug!(workdir = %repo.workdir().display(), "opened repository");
    Ok(repo)
}

/// Parses raw commits, skipping the ones the parser does not understand.
pub fn parse_commits(parser: &dyn CommitParser, raw_commits: &[RawCommit]) -> Vec<ParsedCommit> {
    raw_commits
        .iter()
        .flat_map(|raw| {
            let parsed = parser.parse(raw);
            if parsed.is_empty() {
                debug!(
                    hash = %raw.short_hash(),
                    subject = %raw.subject(),
                    "skipping unparseable commit"
                );
            }
            parsed
        })
        .collect()
}
