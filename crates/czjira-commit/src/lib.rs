//! Answer and commit types for czjira.
//!
//! This crate provides the data model shared by every other crate:
//! - [`Answer`] / [`AnswerSet`]: the responses collected for one commit message
//! - [`RawCommit`]: a commit as read from the repository
//! - [`ParsedCommit`]: a changelog entry parsed from a raw commit

mod answer;
mod parsed;
mod raw;

pub use answer::{Answer, AnswerSet};
pub use parsed::{BREAKING_CHANGE, ParsedCommit};
pub use raw::RawCommit;
