//! Changelog command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use semver::Version;
use tracing::info;

use czjira_formatter_sections::SectionsFormatter;
use czjira_parser_conventional::ConventionalParser;
use czjira_plugin::{ChangelogFormatter, CommitRules, Release};

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Start after this tag or revision (default: latest version tag)
    #[arg(long)]
    pub from: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Title the section with this version instead of "Unreleased"
    #[arg(long)]
    pub release: Option<Version>,

    /// Prefix of version tags
    #[arg(long, default_value = "v")]
    pub tag_prefix: String,
}

/// Runs the changelog command.
pub fn run(args: &ChangelogArgs, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;
    let repo = super::open_repository()?;

    let since = match &args.from {
        Some(from) => Some(from.clone()),
        None => repo
            .latest_version_tag(&args.tag_prefix)
            .context("failed to get latest version tag")?,
    };
    info!(since = ?since, "collecting commits");

    let raw_commits = repo
        .commits_since(since.as_deref())
        .context("failed to get commits")?;
    let parsed = super::parse_commits(&ConventionalParser::new(), &raw_commits);

    let mut entries = Vec::with_capacity(parsed.len());
    for commit in parsed {
        let short_hash = commit.short_hash().to_string();
        if let Some(entry) = plugin
            .changelog_message_hook(commit)
            .with_context(|| format!("failed to rewrite commit {short_hash}"))?
        {
            entries.push(entry);
        }
    }
    info!(count = entries.len(), "changelog entries");

    let release = match &args.release {
        Some(version) => Release::new(version.clone(), Utc::now(), entries),
        None => Release::unreleased(Utc::now(), entries),
    };
    let output = SectionsFormatter::new().format(&release, &plugin.section_config());

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote changelog");
        }
        None => print!("{output}"),
    }

    Ok(())
}
