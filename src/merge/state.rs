//! Merge-retry state machine - pure transitions
//!
//! No I/O happens here. The controller in `execute` feeds events in and
//! performs whatever the resulting state asks for.

use crate::error::{Error, Result};
use std::fmt;

/// Key that marks the conflict as resolved by hand
pub const CONTINUE_KEY: char = 'c';

/// Key that ends the program
pub const EXIT_KEY: char = 'e';

/// State of one merge-retry controller run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeState {
    /// Nothing issued yet
    Idle,
    /// The merge command is running
    MergeAttempted,
    /// The merge failed and the operator has to decide
    AwaitingOperatorInput,
    /// Merge succeeded or the operator resolved it
    Resolved,
    /// The operator asked to exit
    Aborted,
}

impl MergeState {
    /// Whether the controller loop stops in this state
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Aborted)
    }

    /// Apply `event`, returning the next state.
    ///
    /// Events that make no sense in the current state are internal errors.
    pub fn transition(self, event: MergeEvent) -> Result<Self> {
        match (self, event) {
            (Self::Idle, MergeEvent::Issue) => Ok(Self::MergeAttempted),
            (Self::MergeAttempted, MergeEvent::Succeeded) => Ok(Self::Resolved),
            (Self::MergeAttempted, MergeEvent::Failed) => Ok(Self::AwaitingOperatorInput),
            (Self::AwaitingOperatorInput, MergeEvent::Key(choice)) => Ok(match choice {
                OperatorChoice::Continue => Self::Resolved,
                OperatorChoice::Exit => Self::Aborted,
                OperatorChoice::Other(_) => Self::AwaitingOperatorInput,
            }),
            (state, event) => Err(Error::Internal(format!(
                "invalid merge transition: {event:?} in state {state}"
            ))),
        }
    }
}

impl fmt::Display for MergeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::MergeAttempted => write!(f, "merge attempted"),
            Self::AwaitingOperatorInput => write!(f, "awaiting operator input"),
            Self::Resolved => write!(f, "resolved"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

/// Input to [`MergeState::transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeEvent {
    /// Issue the merge command
    Issue,
    /// The merge command succeeded
    Succeeded,
    /// The merge command failed (any reason)
    Failed,
    /// The operator pressed a key
    Key(OperatorChoice),
}

/// Operator decision derived from a key-press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorChoice {
    /// Conflict resolved by hand, carry on
    Continue,
    /// Stop the program
    Exit,
    /// Unrecognised key, ask again
    Other(char),
}

impl From<char> for OperatorChoice {
    fn from(key: char) -> Self {
        match key {
            CONTINUE_KEY => Self::Continue,
            EXIT_KEY => Self::Exit,
            other => Self::Other(other),
        }
    }
}
