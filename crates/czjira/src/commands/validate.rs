//! Validate command.

use std::path::Path;

use anyhow::{Result, anyhow, bail};
use clap::Args;

use czjira_commit::Answer;
use czjira_jira::fields;

/// Arguments for the validate command.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Answer field (e.g. issue_number)
    pub field: String,

    /// Answer to check; omitted means no answer
    pub value: Option<String>,
}

/// Runs the validate command.
pub fn run(args: &ValidateArgs, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;

    let Some(question) = plugin.question(&args.field) else {
        bail!(
            "unknown field `{}`, expected one of: {}",
            args.field,
            fields::ALL.join(", ")
        );
    };

    let answer = Answer::from(args.value.clone());
    question
        .validate(&answer)
        .map_err(|reason| anyhow!("{}: {reason}", args.field))?;

    println!("{}: ok", args.field);
    Ok(())
}
