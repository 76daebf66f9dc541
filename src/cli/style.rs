//! Terminal styling helpers
//!
//! Colors are always emitted; `anstream` strips them when the output is not
//! a color-capable terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used for finished steps
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// Secondary information
    fn muted(&self) -> String {
        format!("{}", self.dimmed())
    }

    /// Headings and important words
    fn emphasis(&self) -> String {
        format!("{}", self.bold())
    }

    /// Names (branches, remotes, URLs)
    fn accent(&self) -> String {
        format!("{}", self.cyan())
    }

    /// Successful outcome
    fn success(&self) -> String {
        format!("{}", self.green())
    }

    /// Warnings and failures the operator has to act on
    fn warn(&self) -> String {
        format!("{}", self.yellow())
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style for network steps
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
