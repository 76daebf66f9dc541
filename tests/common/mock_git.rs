//! Mock collaborators for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use boilerplate_merge::error::{Error, Result};
use boilerplate_merge::git::GitClient;
use boilerplate_merge::progress::{ProgressCallback, WorkflowStep};
use boilerplate_merge::prompt::OperatorPrompt;
use boilerplate_merge::types::{GitRemote, MergeOptions, RepoStatus};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded call to the git collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    IsRepository,
    Status,
    LocalBranches,
    CreateBranch(String),
    Checkout(String),
    Remotes,
    AddRemote { name: String, url: String },
    Fetch { remote: String, branch: String },
    Merge { refspec: String, options: MergeOptions },
    AddAll,
    Commit(String),
    Push { remote: String, branch: String },
}

impl GitCall {
    /// Whether the call changes the repository
    pub const fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::IsRepository | Self::Status | Self::LocalBranches | Self::Remotes
        )
    }
}

/// In-memory repository state the mock answers from
#[derive(Debug)]
struct RepoState {
    is_repo: bool,
    current: Option<String>,
    clean: bool,
    branches: Vec<String>,
    remotes: Vec<GitRemote>,
    merge_changes_tree: bool,
}

/// Simple mock git client for testing
///
/// Features:
/// - Tracks current branch, branches and remotes across calls
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGitClient {
    state: Mutex<RepoState>,
    calls: Mutex<Vec<GitCall>>,
    error_on_merge: Mutex<Option<String>>,
    error_on_fetch: Mutex<Option<String>>,
    error_on_push: Mutex<Option<String>>,
    error_on_add_remote: Mutex<Option<String>>,
}

impl MockGitClient {
    /// A clean repository on `branch` with no other branches or remotes
    pub fn on_branch(branch: &str) -> Self {
        Self {
            state: Mutex::new(RepoState {
                is_repo: true,
                current: Some(branch.to_string()),
                clean: true,
                branches: vec![branch.to_string()],
                remotes: Vec::new(),
                merge_changes_tree: true,
            }),
            calls: Mutex::new(Vec::new()),
            error_on_merge: Mutex::new(None),
            error_on_fetch: Mutex::new(None),
            error_on_push: Mutex::new(None),
            error_on_add_remote: Mutex::new(None),
        }
    }

    // === State setup ===

    /// Pretend the directory is not a repository
    pub fn not_a_repository(&self) {
        self.state.lock().unwrap().is_repo = false;
    }

    /// Detach HEAD
    pub fn detach_head(&self) {
        self.state.lock().unwrap().current = None;
    }

    /// Mark the working tree as having local changes
    pub fn make_dirty(&self) {
        self.state.lock().unwrap().clean = false;
    }

    /// Add an existing local branch
    pub fn add_branch(&self, name: &str) {
        self.state.lock().unwrap().branches.push(name.to_string());
    }

    /// Add an existing remote
    pub fn add_existing_remote(&self, name: &str, url: &str) {
        self.state.lock().unwrap().remotes.push(GitRemote {
            name: name.to_string(),
            fetch_url: url.to_string(),
            push_url: url.to_string(),
        });
    }

    /// Make merges leave the tree clean (nothing new upstream)
    pub fn merge_is_noop(&self) {
        self.state.lock().unwrap().merge_changes_tree = false;
    }

    // === Error injection methods ===

    /// Make `merge` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `fetch` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `push` return an error
    pub fn fail_push(&self, msg: &str) {
        *self.error_on_push.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_remote` return an error
    pub fn fail_add_remote(&self, msg: &str) {
        *self.error_on_add_remote.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that changed the repository
    pub fn mutations(&self) -> Vec<GitCall> {
        self.calls()
            .into_iter()
            .filter(GitCall::is_mutation)
            .collect()
    }

    /// Number of `merge` calls
    pub fn merge_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GitCall::Merge { .. }))
            .count()
    }

    /// Currently checked-out branch
    pub fn current_branch(&self) -> Option<String> {
        self.state.lock().unwrap().current.clone()
    }

    /// Forget recorded calls (state is kept)
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(slot: &Mutex<Option<String>>, command: &str) -> Result<()> {
        match slot.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::Git {
                command: command.to_string(),
                stderr: msg.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitClient for MockGitClient {
    async fn is_repository(&self) -> Result<bool> {
        self.record(GitCall::IsRepository);
        Ok(self.state.lock().unwrap().is_repo)
    }

    async fn status(&self) -> Result<RepoStatus> {
        self.record(GitCall::Status);
        let state = self.state.lock().unwrap();
        Ok(RepoStatus {
            current: state.current.clone(),
            is_clean: state.clean,
        })
    }

    async fn local_branches(&self) -> Result<Vec<String>> {
        self.record(GitCall::LocalBranches);
        Ok(self.state.lock().unwrap().branches.clone())
    }

    async fn create_branch(&self, branch: &str) -> Result<()> {
        self.record(GitCall::CreateBranch(branch.to_string()));
        let mut state = self.state.lock().unwrap();
        if state.branches.iter().any(|b| b == branch) {
            return Err(Error::Git {
                command: format!("checkout -b {branch}"),
                stderr: format!("fatal: a branch named '{branch}' already exists"),
            });
        }
        state.branches.push(branch.to_string());
        state.current = Some(branch.to_string());
        Ok(())
    }

    async fn checkout(&self, branch: &str) -> Result<()> {
        self.record(GitCall::Checkout(branch.to_string()));
        let mut state = self.state.lock().unwrap();
        if !state.branches.iter().any(|b| b == branch) {
            return Err(Error::Git {
                command: format!("checkout {branch}"),
                stderr: format!("error: pathspec '{branch}' did not match"),
            });
        }
        state.current = Some(branch.to_string());
        Ok(())
    }

    async fn remotes(&self) -> Result<Vec<GitRemote>> {
        self.record(GitCall::Remotes);
        Ok(self.state.lock().unwrap().remotes.clone())
    }

    async fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.record(GitCall::AddRemote {
            name: name.to_string(),
            url: url.to_string(),
        });
        Self::injected(&self.error_on_add_remote, "remote add")?;
        let mut state = self.state.lock().unwrap();
        if state.remotes.iter().any(|r| r.name == name) {
            return Err(Error::Git {
                command: format!("remote add {name} {url}"),
                stderr: format!("error: remote {name} already exists."),
            });
        }
        state.remotes.push(GitRemote {
            name: name.to_string(),
            fetch_url: url.to_string(),
            push_url: url.to_string(),
        });
        Ok(())
    }

    async fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(GitCall::Fetch {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        Self::injected(&self.error_on_fetch, "fetch")
    }

    async fn merge(&self, refspec: &str, options: MergeOptions) -> Result<()> {
        self.record(GitCall::Merge {
            refspec: refspec.to_string(),
            options,
        });
        let mut state = self.state.lock().unwrap();
        if state.merge_changes_tree {
            state.clean = false;
        }
        drop(state);
        Self::injected(&self.error_on_merge, "merge")
    }

    async fn add_all(&self) -> Result<()> {
        self.record(GitCall::AddAll);
        Ok(())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.record(GitCall::Commit(message.to_string()));
        self.state.lock().unwrap().clean = true;
        Ok(())
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(GitCall::Push {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        Self::injected(&self.error_on_push, "push")
    }
}

/// Operator prompt answering from a fixed list of keys
///
/// Runs out with an error instead of blocking, so a test that prompts more
/// often than expected fails rather than hangs.
pub struct ScriptedPrompt {
    keys: Mutex<VecDeque<char>>,
    hints: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Answer with `keys`, in order
    pub fn new(keys: &[char]) -> Self {
        Self {
            keys: Mutex::new(keys.iter().copied().collect()),
            hints: Mutex::new(Vec::new()),
        }
    }

    /// A prompt that must never be asked
    pub fn silent() -> Self {
        Self::new(&[])
    }

    /// Number of times a key was requested
    pub fn prompt_count(&self) -> usize {
        self.hints.lock().unwrap().len()
    }

    /// Hints shown, in order
    pub fn hints(&self) -> Vec<String> {
        self.hints.lock().unwrap().clone()
    }
}

#[async_trait]
impl OperatorPrompt for ScriptedPrompt {
    async fn read_key(&self, hint: &str) -> Result<char> {
        self.hints.lock().unwrap().push(hint.to_string());
        self.keys
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Prompt("no scripted key left".to_string()))
    }
}

/// Progress callback recording every notification
#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Vec<WorkflowStep>>,
    finished: Mutex<Vec<WorkflowStep>>,
}

impl RecordingProgress {
    /// Steps that were started
    pub fn started(&self) -> Vec<WorkflowStep> {
        self.started.lock().unwrap().clone()
    }

    /// Steps that finished
    pub fn finished(&self) -> Vec<WorkflowStep> {
        self.finished.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_step_started(&self, step: WorkflowStep) {
        self.started.lock().unwrap().push(step);
    }

    async fn on_step_finished(&self, step: WorkflowStep) {
        self.finished.lock().unwrap().push(step);
    }
}
