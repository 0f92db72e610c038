//! Check error types.

use thiserror::Error;

/// Errors a check can report instead of findings.
///
/// The engine never propagates these: a failing check is logged and
/// contributes nothing to the lint pass.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A pattern from a rule table failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The check gave up on this input.
    #[error("Check failed: {0}")]
    Failed(String),
}

impl CheckError {
    /// Creates a failure error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
