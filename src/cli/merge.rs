//! Merge command - pull boilerplate changes onto the working branch

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use boilerplate_merge::error::Result;
use boilerplate_merge::types::{WorkflowOptions, WorkflowOutcome};
use boilerplate_merge::workflow::run_workflow;
use std::path::Path;
use tracing::debug;

/// Run the boilerplate merge in the repository at `path`
pub async fn run_merge(path: &Path, options: &WorkflowOptions) -> Result<WorkflowOutcome> {
    let ctx = CommandContext::new(path)?;
    debug!(workdir = %ctx.git.workdir().display(), ?options, "starting boilerplate merge");

    let result = run_workflow(&ctx.collaborators(), options).await;
    ctx.progress.clear();

    let outcome = result?;
    print_summary(&outcome);
    Ok(outcome)
}

/// Print the final outcome to stdout
fn print_summary(outcome: &WorkflowOutcome) {
    match outcome {
        WorkflowOutcome::Completed {
            branch,
            origin_push_url,
            pull_request_url,
            committed,
        } => {
            println!();
            if *committed {
                println!("{} Boilerplate changes pushed on {}", check(), branch.accent());
            } else {
                println!(
                    "{} {} is already up to date with the boilerplate",
                    check(),
                    branch.accent()
                );
            }

            if let Some(url) = pull_request_url {
                println!("   Open the PR at {}", hyperlink(url).accent());
            } else if let Some(url) = origin_push_url {
                println!("   You can open the PR at {}", url.accent());
            }
        }
        WorkflowOutcome::DirtyTree => {
            println!(
                "{}",
                "Working tree has local changes. Stash or commit them, then run again.".warn()
            );
        }
        WorkflowOutcome::Aborted => {
            println!("{}", "Aborted".muted());
        }
    }
}

/// Render `url` as a terminal hyperlink where supported
fn hyperlink(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
