//! Merge-retry controller
//!
//! Two parts, following the pure/effectful split:
//! 1. State - `MergeState` transitions (pure, testable)
//! 2. Execute - issue the merge and ask the operator on failure (effectful)

mod execute;
mod state;

pub use execute::{MergeOutcome, merge_with_retry};
pub use state::{CONTINUE_KEY, EXIT_KEY, MergeEvent, MergeState, OperatorChoice};
