//! Merge execution - effectful operations
//!
//! Drives [`MergeState`] against a real git collaborator and operator
//! prompt. The merge command is issued exactly once; only the operator
//! decision loops.

use crate::error::{Error, Result};
use crate::git::GitClient;
use crate::merge::state::{CONTINUE_KEY, EXIT_KEY, MergeEvent, MergeState, OperatorChoice};
use crate::prompt::OperatorPrompt;
use crate::types::MergeOptions;
use tracing::{info, warn};

/// Final result of the merge-retry controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Continue with the workflow
    Resolved {
        /// `false` when the operator resolved a failed merge by hand
        merged_cleanly: bool,
        /// Number of keys read before the operator continued
        prompts: usize,
    },
    /// The operator asked to exit
    Aborted,
}

impl MergeOutcome {
    /// Whether the workflow should stop here
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Squash-merge `remote/source_branch` into the checked-out branch.
///
/// On failure the operator is asked until they press `c` (treat as
/// resolved) or `e` (abort). Any other key shows the failure again.
pub async fn merge_with_retry(
    git: &dyn GitClient,
    operator: &dyn OperatorPrompt,
    remote: &str,
    source_branch: &str,
) -> Result<MergeOutcome> {
    let refspec = format!("{remote}/{source_branch}");
    let mut state = MergeState::Idle.transition(MergeEvent::Issue)?;

    info!(%refspec, "Merging changes from remote into the current branch");

    let failure = match git.merge(&refspec, MergeOptions::boilerplate()).await {
        Ok(()) => {
            state = state.transition(MergeEvent::Succeeded)?;
            debug_assert!(state.is_terminal());
            return Ok(MergeOutcome::Resolved {
                merged_cleanly: true,
                prompts: 0,
            });
        }
        Err(e) => {
            state = state.transition(MergeEvent::Failed)?;
            e
        }
    };

    let hint = format!("Press {CONTINUE_KEY} when the merge is finished, {EXIT_KEY} to exit.");
    let mut prompts = 0;

    while !state.is_terminal() {
        warn!("Merge failed, see below for logs. {hint}\n\n{failure}");
        let key = operator.read_key(&hint).await?;
        prompts += 1;

        let choice = OperatorChoice::from(key);
        if let OperatorChoice::Other(other) = choice {
            warn!(key = ?other, "Unrecognised key, waiting for {CONTINUE_KEY} or {EXIT_KEY}");
        }
        state = state.transition(MergeEvent::Key(choice))?;
    }

    match state {
        MergeState::Resolved => {
            info!("Continuing with manually resolved merge");
            Ok(MergeOutcome::Resolved {
                merged_cleanly: false,
                prompts,
            })
        }
        MergeState::Aborted => {
            info!("Exiting at operator request");
            Ok(MergeOutcome::Aborted)
        }
        other => Err(Error::Internal(format!(
            "merge controller stopped in non-terminal state {other}"
        ))),
    }
}
