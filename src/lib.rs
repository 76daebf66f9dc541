//! boilerplate-merge - pull template repository changes into a project
//!
//! Squash-merges a branch of a boilerplate repository onto a working branch,
//! commits, pushes it to `origin` for review and returns to the starting
//! branch. All version control work is delegated to git.

pub mod error;
pub mod git;
pub mod logging;
pub mod merge;
pub mod platform;
pub mod progress;
pub mod prompt;
pub mod types;
pub mod workflow;
