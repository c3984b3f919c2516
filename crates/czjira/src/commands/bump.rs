//! Bump command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use semver::Version;
use tracing::info;

use czjira_bumper_map::MapBumper;
use czjira_parser_conventional::ConventionalParser;
use czjira_plugin::BumpStrategy;

/// Arguments for the bump command.
#[derive(Debug, Args)]
pub struct BumpArgs {
    /// Prefix of version tags
    #[arg(long, default_value = "v")]
    pub tag_prefix: String,
}

/// Runs the bump command.
pub fn run(args: &BumpArgs, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;
    let repo = super::open_repository()?;

    let latest_tag = repo
        .latest_version_tag(&args.tag_prefix)
        .context("failed to get latest version tag")?;
    info!(tag = ?latest_tag, "found latest version tag");

    let raw_commits = repo
        .commits_since(latest_tag.as_deref())
        .context("failed to get commits")?;
    if raw_commits.is_empty() {
        bail!("no commits found since last release");
    }

    let parsed = super::parse_commits(&ConventionalParser::new(), &raw_commits);
    let bump = MapBumper::new(plugin.bump_map().clone()).determine(&parsed);
    info!(commits = raw_commits.len(), bump = %bump, "determined bump type");

    let current = latest_tag
        .as_deref()
        .and_then(|tag| tag.strip_prefix(&args.tag_prefix))
        .and_then(|version| Version::parse(version).ok())
        .unwrap_or_else(|| Version::new(0, 0, 0));
    let next = bump.apply(&current);

    println!("{current} -> {next} ({bump})");
    Ok(())
}
