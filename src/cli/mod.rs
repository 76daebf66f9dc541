//! CLI plumbing for the `boilerplate-merge` binary

pub mod context;
pub mod merge;
pub mod prompt;
pub mod style;

use async_trait::async_trait;
use boilerplate_merge::progress::{ProgressCallback, WorkflowStep};
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;
use style::{Stylize, check, spinner_style};

/// Progress reporter showing a spinner while fetching and pushing
///
/// Other steps are reported through the log only.
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a reporter with no active spinner
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a spinner left behind by a failed step
    pub fn clear(&self) {
        if let Some(spinner) = self.take() {
            spinner.finish_and_clear();
        }
    }

    fn take(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut s| s.take())
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_step_started(&self, step: WorkflowStep) {
        if !step.is_network() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(match step {
            WorkflowStep::Fetch => "Fetching boilerplate changes...".to_string(),
            WorkflowStep::Push => "Pushing to origin...".to_string(),
            other => format!("{other}..."),
        });
        spinner.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }

    async fn on_step_finished(&self, step: WorkflowStep) {
        if let Some(spinner) = self.take() {
            spinner.finish_with_message(format!("{} {}", check(), step.to_string().muted()));
        }
    }
}
