//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// The starting point of a commit range does not resolve to a commit.
    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    /// The index holds no change against HEAD.
    #[error("nothing staged to commit")]
    NothingStaged,

    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
        assert_eq!(GitError::NothingStaged.to_string(), "nothing staged to commit");
    }
}
