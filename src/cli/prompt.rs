//! Operator prompt reading raw key-presses from the terminal

use crate::cli::style::Stylize;
use async_trait::async_trait;
use boilerplate_merge::error::{Error, Result};
use boilerplate_merge::prompt::OperatorPrompt;
use console::Term;
use std::io::{BufRead, IsTerminal};

/// Reads one key without waiting for Enter when attached to a terminal.
///
/// With redirected stdin the first character of the next line counts as
/// the key, so the tool can be driven from a script.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

#[async_trait]
impl OperatorPrompt for TerminalPrompt {
    async fn read_key(&self, hint: &str) -> Result<char> {
        anstream::eprintln!("{}", hint.warn());

        tokio::task::spawn_blocking(read_one_key)
            .await
            .map_err(|e| Error::Prompt(format!("key reader panicked: {e}")))?
    }
}

fn read_one_key() -> Result<char> {
    let term = Term::stderr();

    if std::io::stdin().is_terminal() && term.is_term() {
        return term.read_char().map_err(|e| Error::Prompt(e.to_string()));
    }

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(Error::Prompt("stdin closed".to_string()));
    }
    Ok(line.trim().chars().next().unwrap_or('\n'))
}
