//! Core types for boilerplate-merge

/// Default name of the remote pointing at the boilerplate repository
pub const DEFAULT_REMOTE: &str = "boilerplate";

/// Default branch pulled from the boilerplate repository
pub const DEFAULT_SOURCE_BRANCH: &str = "master";

/// Default commit message for the squashed changes
pub const DEFAULT_MESSAGE: &str = "Merge boilerplate changes";

/// Default local branch the changes are merged onto
pub const DEFAULT_BRANCH: &str = "feat/boilerplate-merge";

/// Remote the working branch is pushed to
pub const PUSH_REMOTE: &str = "origin";

/// Options for a single workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// URL of the boilerplate repository
    pub source: String,
    /// Local name of the boilerplate remote
    pub remote: String,
    /// Branch of the boilerplate repository to merge
    pub source_branch: String,
    /// Commit message used for the squashed changes
    pub message: String,
    /// Local working branch
    pub branch: String,
}

impl WorkflowOptions {
    /// Options for `source` with every other field at its default
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            remote: DEFAULT_REMOTE.to_string(),
            source_branch: DEFAULT_SOURCE_BRANCH.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Point-in-time view of the working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    /// Checked-out branch, `None` when HEAD is detached
    pub current: Option<String>,
    /// No staged, unstaged or untracked changes
    pub is_clean: bool,
}

/// A git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// URL used for fetching
    pub fetch_url: String,
    /// URL used for pushing
    pub push_url: String,
}

/// Flags for `git merge`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Allow merging histories without a common ancestor
    pub allow_unrelated_histories: bool,
    /// Stage the result without creating a merge commit
    pub squash: bool,
}

impl MergeOptions {
    /// Options used when pulling boilerplate changes
    pub const fn boilerplate() -> Self {
        Self {
            allow_unrelated_histories: true,
            squash: true,
        }
    }
}

/// Detected hosting platform of a remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// GitHub or GitHub Enterprise
    GitHub,
    /// GitLab or self-hosted GitLab
    GitLab,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GitHub => write!(f, "GitHub"),
            Self::GitLab => write!(f, "GitLab"),
        }
    }
}

/// How a workflow run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Changes merged, pushed and the starting branch restored
    Completed {
        /// Branch that was pushed
        branch: String,
        /// Push URL of `origin`, if that remote exists
        origin_push_url: Option<String>,
        /// Web link for opening a pull/merge request, if the host is recognised
        pull_request_url: Option<String>,
        /// Whether a commit was created (false when nothing changed)
        committed: bool,
    },
    /// The tree had local changes, nothing was touched
    DirtyTree,
    /// The operator chose to exit during conflict resolution
    Aborted,
}
