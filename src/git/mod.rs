//! Git collaborator
//!
//! The workflow only ever talks to git through [`GitClient`], so tests can
//! swap in a recording mock while the binary uses [`GitCli`].

mod cli;

pub use cli::{GitCli, parse_remotes, parse_status};

use crate::error::Result;
use crate::types::{GitRemote, MergeOptions, RepoStatus};
use async_trait::async_trait;

/// Git operations needed by the boilerplate workflow
///
/// Every method maps to a single git invocation. Failures are reported as
/// errors and never retried here.
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Whether the working directory is inside a git working tree
    async fn is_repository(&self) -> Result<bool>;

    /// Current branch and clean/dirty state
    async fn status(&self) -> Result<RepoStatus>;

    /// Names of all local branches
    async fn local_branches(&self) -> Result<Vec<String>>;

    /// Create `branch` from HEAD and check it out
    async fn create_branch(&self, branch: &str) -> Result<()>;

    /// Check out an existing branch
    async fn checkout(&self, branch: &str) -> Result<()>;

    /// Configured remotes with their fetch and push URLs
    async fn remotes(&self) -> Result<Vec<GitRemote>>;

    /// Add a remote
    async fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    /// Fetch a single branch from a remote
    async fn fetch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Merge `refspec` into the current branch
    async fn merge(&self, refspec: &str, options: MergeOptions) -> Result<()>;

    /// Stage every change in the working tree
    async fn add_all(&self) -> Result<()>;

    /// Commit the staged changes
    async fn commit(&self, message: &str) -> Result<()>;

    /// Push a local branch to a remote
    async fn push(&self, remote: &str, branch: &str) -> Result<()>;
}
