//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::commands::info::Topic;

/// Author Jira-aware commit messages and generate linked changelogs.
#[derive(Debug, Parser)]
#[command(name = "czjira")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: nearest cz.toml, .cz.toml or pyproject.toml)
    #[arg(short, long, global = true, env = "CZJIRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the questions and prompt style as JSON
    Questions(commands::questions::QuestionsArgs),

    /// Validate a single answer
    Validate(commands::validate::ValidateArgs),

    /// Render a commit message from an answers file
    Message(commands::message::MessageArgs),

    /// Generate a changelog with Jira links
    Changelog(commands::changelog::ChangelogArgs),

    /// Show the next version from the bump map
    Bump(commands::bump::BumpArgs),

    /// Print an example commit message
    Example,

    /// Print the commit message schema
    Schema,

    /// Explain the commit rules
    Info,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.config.as_deref();

        match self.command {
            Commands::Questions(args) => commands::questions::run(&args, config),
            Commands::Validate(args) => commands::validate::run(&args, config),
            Commands::Message(args) => commands::message::run(&args, config),
            Commands::Changelog(args) => commands::changelog::run(&args, config),
            Commands::Bump(args) => commands::bump::run(&args, config),
            Commands::Example => commands::info::run(Topic::Example, config),
            Commands::Schema => commands::info::run(Topic::Schema, config),
            Commands::Info => commands::info::run(Topic::Info, config),
        }
    }
}
