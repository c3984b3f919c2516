//! Informational commands.

use std::path::Path;

use anyhow::Result;

use czjira_plugin::{CommitRules, Plugin};

/// Which informational text to print.
#[derive(Debug, Clone, Copy)]
pub enum Topic {
    Example,
    Schema,
    Info,
}

/// Runs the example, schema and info commands.
pub fn run(topic: Topic, config: Option<&Path>) -> Result<()> {
    let plugin = super::load_plugin(config)?;

    let text = match topic {
        Topic::Example => plugin.example(),
        Topic::Schema => plugin.schema(),
        Topic::Info => {
            println!("{}: {}\n", plugin.name(), plugin.description());
            plugin.info()
        }
    };

    println!("{text}");
    Ok(())
}
