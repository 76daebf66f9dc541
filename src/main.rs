//! boilerplate-merge CLI

mod cli;

use boilerplate_merge::logging::{LOG_LEVEL_ENV, log_filter};
use boilerplate_merge::types::{
    DEFAULT_BRANCH, DEFAULT_MESSAGE, DEFAULT_REMOTE, DEFAULT_SOURCE_BRANCH, WorkflowOptions,
};
use clap::Parser;
use cli::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

/// Merge boilerplate template changes into a working branch
#[derive(Parser, Debug)]
#[command(name = "boilerplate-merge", version, about, long_about = None)]
struct Cli {
    /// The source (boilerplate) URL
    #[arg(long)]
    source: String,

    /// The local remote name
    #[arg(long, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// The source branch to pull from
    #[arg(long, default_value = DEFAULT_SOURCE_BRANCH)]
    source_branch: String,

    /// The commit message to use in the merge
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    message: String,

    /// The local branch to work in
    #[arg(long, default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Path to the repository
    #[arg(long, default_value = ".")]
    path: PathBuf,
}

impl Cli {
    fn workflow_options(&self) -> WorkflowOptions {
        WorkflowOptions {
            source: self.source.clone(),
            remote: self.remote.clone(),
            source_branch: self.source_branch.clone(),
            message: self.message.clone(),
            branch: self.branch.clone(),
        }
    }
}

fn init_logging() {
    let raw = std::env::var(LOG_LEVEL_ENV).ok();
    let log = log_filter(raw.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(log.filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(rejected) = log.rejected {
        warn!("Ignoring invalid {LOG_LEVEL_ENV}={rejected}, using info");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli::merge::run_merge(&cli.path, &cli.workflow_options()).await {
        Ok(_) => ExitCode::SUCCESS,
        // Already logged by the workflow
        Err(e) if e.is_fatal_precondition() => ExitCode::from(1),
        Err(e) => {
            anstream::eprintln!("{} {e}", "Error:".warn());
            ExitCode::from(1)
        }
    }
}
