//! Message command.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{info, warn};

use czjira_commit::AnswerSet;
use czjira_jira::JiraPlugin;
use czjira_plugin::CommitRules;

/// Arguments for the message command.
#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Answers file: JSON, or TOML with a .toml extension; `-` reads JSON from stdin
    #[arg(short, long)]
    pub answers: PathBuf,

    /// Commit the staged changes with the rendered message
    #[arg(long)]
    pub commit: bool,
}

/// Reads an answer set from a file or stdin.
fn read_answers(path: &Path) -> Result<AnswerSet> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read answers from stdin")?;
        return serde_json::from_str(&content).context("invalid JSON answers on stdin");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("invalid TOML answers in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON answers in {}", path.display()))
    }
}

/// Checks every answer and reports all failures at once.
fn validate_answers(plugin: &JiraPlugin, answers: &AnswerSet) -> Result<()> {
    let questions = plugin.questions();

    for (name, _) in answers.iter() {
        if !questions.iter().any(|question| question.name == name) {
            warn!(field = name, "ignoring unknown answer field");
        }
    }

    let failures: Vec<String> = questions
        .iter()
        .filter_map(|question| {
            question
                .validate(answers.get(question.name))
                .err()
                .map(|reason| format!("{}: {reason}", question.name))
        })
        .collect();

    if failures.is_empty() {
        return Ok(());
    }

    for failure in &failures {
        eprintln!("{failure}");
    }
    bail!("{} answer(s) failed validation", failures.len());
}

/// Runs the message command.
pub fn run(args: &MessageArgs, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;
    let answers = read_answers(&args.answers)?;

    validate_answers(&plugin, &answers)?;

    let message = plugin.message(&answers);

    if args.commit {
        let hash = super::open_repository()?
            .commit_staged(&message)
            .context("failed to commit staged changes")?;
        info!(hash = %hash, "created commit");
    }

    println!("{message}");
    Ok(())
}
