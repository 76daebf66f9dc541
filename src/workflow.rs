//! Workflow sequencer
//!
//! Runs the git calls of a boilerplate merge in strict order:
//! verify → status → branch → remote → fetch → merge → commit → push →
//! restore. Ordering matters (the remote has to exist before fetching), so
//! nothing here runs concurrently.

use crate::error::{Error, Result};
use crate::git::GitClient;
use crate::merge::{MergeOutcome, merge_with_retry};
use crate::platform::pull_request_url;
use crate::progress::{ProgressCallback, WorkflowStep};
use crate::prompt::OperatorPrompt;
use crate::types::{GitRemote, PUSH_REMOTE, WorkflowOptions, WorkflowOutcome};
use tracing::{error, info, warn};

/// Collaborators used by [`run_workflow`]
pub struct Collaborators<'a> {
    /// Git access
    pub git: &'a dyn GitClient,
    /// Operator key-presses during conflict resolution
    pub operator: &'a dyn OperatorPrompt,
    /// Step notifications
    pub progress: &'a dyn ProgressCallback,
}

/// Run the full boilerplate merge workflow.
///
/// Returns [`Error::NotARepository`] / [`Error::NotOnBranch`] for the fatal
/// preconditions. A dirty tree is not an error: it yields
/// [`WorkflowOutcome::DirtyTree`] before anything is modified.
pub async fn run_workflow(
    collab: &Collaborators<'_>,
    options: &WorkflowOptions,
) -> Result<WorkflowOutcome> {
    let Collaborators {
        git,
        operator,
        progress,
    } = *collab;

    // Preconditions
    progress.on_step_started(WorkflowStep::VerifyRepository).await;
    if !git.is_repository().await? {
        error!("{}", Error::NotARepository);
        return Err(Error::NotARepository);
    }
    progress.on_step_finished(WorkflowStep::VerifyRepository).await;

    progress.on_step_started(WorkflowStep::CheckStatus).await;
    let status = git.status().await?;
    if !status.is_clean {
        warn!("Current branch is not clean, you should probably stash / commit");
        return Ok(WorkflowOutcome::DirtyTree);
    }
    let Some(starting_branch) = status.current else {
        error!("{}", Error::NotOnBranch);
        return Err(Error::NotOnBranch);
    };
    progress.on_step_finished(WorkflowStep::CheckStatus).await;

    // Working branch (source for the PR)
    progress.on_step_started(WorkflowStep::PrepareBranch).await;
    prepare_branch(git, &options.branch).await?;
    progress.on_step_finished(WorkflowStep::PrepareBranch).await;

    // Boilerplate remote
    progress.on_step_started(WorkflowStep::PrepareRemote).await;
    let remotes = git.remotes().await?;
    prepare_remote(git, &remotes, &options.remote, &options.source).await?;
    progress.on_step_finished(WorkflowStep::PrepareRemote).await;

    info!(remote = %options.remote, branch = %options.source_branch, "Fetching changes from remote");
    progress.on_step_started(WorkflowStep::Fetch).await;
    git.fetch(&options.remote, &options.source_branch).await?;
    progress.on_step_finished(WorkflowStep::Fetch).await;

    progress.on_step_started(WorkflowStep::Merge).await;
    let merge = merge_with_retry(git, operator, &options.remote, &options.source_branch).await?;
    if let MergeOutcome::Aborted = merge {
        return Ok(WorkflowOutcome::Aborted);
    }
    progress.on_step_finished(WorkflowStep::Merge).await;

    progress.on_step_started(WorkflowStep::Commit).await;
    let committed = if git.status().await?.is_clean {
        info!("Nothing changed, skipping commit");
        false
    } else {
        info!("Staging and committing the changes");
        git.add_all().await?;
        git.commit(&options.message).await?;
        true
    };
    progress.on_step_finished(WorkflowStep::Commit).await;

    info!(branch = %options.branch, "Pushing to {PUSH_REMOTE}");
    progress.on_step_started(WorkflowStep::Push).await;
    git.push(PUSH_REMOTE, &options.branch).await?;
    progress.on_step_finished(WorkflowStep::Push).await;

    progress.on_step_started(WorkflowStep::RestoreBranch).await;
    info!(branch = %starting_branch, "Checking back to starting branch");
    git.checkout(&starting_branch).await?;
    progress.on_step_finished(WorkflowStep::RestoreBranch).await;

    let origin_push_url = remotes
        .iter()
        .find(|r| r.name == PUSH_REMOTE)
        .map(|r| r.push_url.clone());
    let pull_request_url = origin_push_url
        .as_deref()
        .and_then(|url| pull_request_url(url, &options.branch));

    match &origin_push_url {
        Some(url) => info!("Done! You can open the PR at {url}"),
        None => info!("Done!"),
    }

    Ok(WorkflowOutcome::Completed {
        branch: options.branch.clone(),
        origin_push_url,
        pull_request_url,
        committed,
    })
}

/// Check out `branch`, creating it from HEAD when it does not exist
async fn prepare_branch(git: &dyn GitClient, branch: &str) -> Result<()> {
    let local = git.local_branches().await?;

    if local.iter().any(|b| b == branch) {
        info!("Target branch \"{branch}\" exists, using it");
        git.checkout(branch).await
    } else {
        info!("Target branch \"{branch}\" does not exist, attempting to make it.");
        git.create_branch(branch).await?;
        info!("Created the target branch");
        Ok(())
    }
}

/// Add remote `name` pointing at `source` unless it is already configured
async fn prepare_remote(
    git: &dyn GitClient,
    remotes: &[GitRemote],
    name: &str,
    source: &str,
) -> Result<()> {
    match remotes.iter().find(|r| r.name == name) {
        Some(existing) => {
            info!("Remote \"{name}\" exists");
            if existing.fetch_url != source {
                warn!(
                    configured = %existing.fetch_url,
                    requested = %source,
                    "Remote \"{name}\" points somewhere else, using the configured URL"
                );
            }
            Ok(())
        }
        None => {
            info!("Remote \"{name}\" does not exist, creating it");
            git.add_remote(name, source).await
        }
    }
}
