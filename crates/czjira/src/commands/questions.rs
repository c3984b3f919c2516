//! Questions command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use czjira_plugin::{CommitRules, Question};

/// Arguments for the questions command.
#[derive(Debug, Args)]
pub struct QuestionsArgs {
    /// Print compact JSON on one line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Serialize)]
struct QuestionsOutput<'a> {
    questions: Vec<Question>,
    style: Vec<(&'a str, &'a str)>,
}

/// Runs the questions command.
pub fn run(args: &QuestionsArgs, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;

    let output = QuestionsOutput {
        questions: plugin.questions(),
        style: plugin
            .prompt_style()
            .iter()
            .map(|style| (style.name.as_str(), style.value.as_str()))
            .collect(),
    };

    let json = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("failed to serialize questions")?;

    println!("{json}");
    Ok(())
}
