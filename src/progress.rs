//! Progress reporting for the workflow steps

use async_trait::async_trait;
use std::fmt;

/// A step of the boilerplate workflow, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    /// Check that the directory is a git working tree
    VerifyRepository,
    /// Check for local changes and read the current branch
    CheckStatus,
    /// Create or check out the working branch
    PrepareBranch,
    /// Add the boilerplate remote if missing
    PrepareRemote,
    /// Fetch the source branch
    Fetch,
    /// Squash-merge the source branch
    Merge,
    /// Stage and commit the merged changes
    Commit,
    /// Push the working branch to origin
    Push,
    /// Check the starting branch back out
    RestoreBranch,
}

impl WorkflowStep {
    /// Steps that talk to another machine and may take a while
    pub const fn is_network(self) -> bool {
        matches!(self, Self::Fetch | Self::Push)
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VerifyRepository => "verify repository",
            Self::CheckStatus => "check status",
            Self::PrepareBranch => "prepare working branch",
            Self::PrepareRemote => "prepare remote",
            Self::Fetch => "fetch",
            Self::Merge => "merge",
            Self::Commit => "commit",
            Self::Push => "push",
            Self::RestoreBranch => "restore starting branch",
        };
        f.write_str(label)
    }
}

/// Callback for step-level progress
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called right before a step runs
    async fn on_step_started(&self, step: WorkflowStep);

    /// Called after a step finished successfully
    async fn on_step_finished(&self, step: WorkflowStep);
}

/// Progress callback that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_step_started(&self, _step: WorkflowStep) {}

    async fn on_step_finished(&self, _step: WorkflowStep) {}
}
