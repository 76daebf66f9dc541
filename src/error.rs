//! Error types for boilerplate-merge

use thiserror::Error;

/// Errors produced while running the boilerplate merge workflow
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory is not inside a git working tree
    #[error("Current directory is not a git repository.")]
    NotARepository,

    /// HEAD is detached, so there is no branch to return to afterwards
    #[error("Not on a branch. Checkout onto a branch and try again")]
    NotOnBranch,

    /// A git command exited with a non-zero status
    #[error("git {command} failed: {stderr}")]
    Git {
        /// Arguments passed to git, space separated
        command: String,
        /// Trimmed stderr (or stdout when stderr was empty)
        stderr: String,
    },

    /// Git produced output we could not interpret
    #[error("unexpected git output: {0}")]
    Parse(String),

    /// Reading the operator's key-press failed
    #[error("failed to read operator input: {0}")]
    Prompt(String),

    /// IO error (spawning git, terminal access)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error is one of the precondition failures that end the
    /// run before any repository mutation.
    pub const fn is_fatal_precondition(&self) -> bool {
        matches!(self, Self::NotARepository | Self::NotOnBranch)
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
