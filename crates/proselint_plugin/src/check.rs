//! The check contract.

use crate::{CheckError, Finding};

/// A pure function from text to findings.
///
/// Checks must not keep state between calls. Any closure or function of
/// shape `Fn(&str) -> Vec<Finding>` or
/// `Fn(&str) -> Result<Vec<Finding>, CheckError>` is a check.
pub trait Check: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<Finding>, CheckError>;
}

/// Return types a check function may have.
pub trait IntoCheckOutcome {
    fn into_outcome(self) -> Result<Vec<Finding>, CheckError>;
}

impl IntoCheckOutcome for Vec<Finding> {
    fn into_outcome(self) -> Result<Vec<Finding>, CheckError> {
        Ok(self)
    }
}

impl IntoCheckOutcome for Result<Vec<Finding>, CheckError> {
    fn into_outcome(self) -> Result<Vec<Finding>, CheckError> {
        self
    }
}

impl<F, R> Check for F
where
    F: Fn(&str) -> R + Send + Sync,
    R: IntoCheckOutcome,
{
    fn check(&self, text: &str) -> Result<Vec<Finding>, CheckError> {
        self(text).into_outcome()
    }
}
