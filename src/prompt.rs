//! Operator input during conflict resolution

use crate::error::Result;
use async_trait::async_trait;

/// Source of single key-presses from the human running the tool
///
/// Implementations block until a key arrives; there is no timeout.
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Show `hint` (which keys do what) and wait for exactly one key
    async fn read_key(&self, hint: &str) -> Result<char>;
}
