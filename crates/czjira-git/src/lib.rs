//! Git access for czjira.
//!
//! This crate provides the Git operations the CLI needs:
//! - Reading commits since a version tag
//! - Finding the latest version tag
//! - Committing staged changes with a formatted message

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
