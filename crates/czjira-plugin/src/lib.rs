//! Plugin system for czjira.
//!
//! This crate provides the plugin traits and the building blocks they share:
//! - [`Plugin`]: Base trait for all plugins
//! - [`CommitRules`]: Questions, message formatting and changelog rewriting
//! - [`CommitParser`]: Parses raw commits into changelog entries
//! - [`BumpStrategy`]: Determines version bump type
//! - [`ChangelogFormatter`]: Formats changelog output
//! - [`validators`]: Answer validators and their composer

mod error;
mod question;
mod traits;
pub mod validators;

pub use error::{PluginError, PluginResult};
pub use question::{Choice, Question, QuestionKind};
pub use traits::Plugin;
pub use traits::bumper::{BumpStrategy, BumpType};
pub use traits::formatter::{ChangelogFormatter, Release, SectionConfig};
pub use traits::parser::CommitParser;
pub use traits::rules::CommitRules;
pub use validators::{ValidationError, ValidationResult, Validator};
