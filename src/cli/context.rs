//! Shared command context for the CLI
//!
//! Builds the concrete collaborators the workflow runs against.

use crate::cli::CliProgress;
use crate::cli::prompt::TerminalPrompt;
use boilerplate_merge::error::Result;
use boilerplate_merge::git::GitCli;
use boilerplate_merge::workflow::Collaborators;
use std::path::Path;

/// Collaborators for one invocation
///
/// Holds the git client for the working directory, the terminal prompt
/// used during conflict resolution and the spinner-based progress reporter.
pub struct CommandContext {
    /// Git client running in the resolved working directory
    pub git: GitCli,
    /// Operator key-presses
    pub operator: TerminalPrompt,
    /// Progress display
    pub progress: CliProgress,
}

impl CommandContext {
    /// Create a context for the repository at `path`
    ///
    /// Fails when `path` does not exist.
    pub fn new(path: &Path) -> Result<Self> {
        let workdir = std::fs::canonicalize(path)?;

        Ok(Self {
            git: GitCli::new(workdir),
            operator: TerminalPrompt,
            progress: CliProgress::new(),
        })
    }

    /// Borrow the collaborators in the shape the workflow expects
    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            git: &self.git,
            operator: &self.operator,
            progress: &self.progress,
        }
    }
}
