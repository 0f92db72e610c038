//! Lint result types.

use std::time::Duration;

use proselint_plugin::Finding;
use serde::{Serialize, Serializer};

/// Result of one lint call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Findings ordered by line then column, at most `maxErrors` long.
    pub errors: Vec<Finding>,
    /// Registered checks at lint time.
    pub total_checks: usize,
    /// Checks enabled by the config, including any not run because the
    /// error budget was exhausted.
    pub enabled_checks: usize,
    /// Wall-clock duration of the call, serialized in milliseconds.
    #[serde(serialize_with = "as_millis")]
    pub execution_time: Duration,
}

impl LintResult {
    /// Returns true if no findings were produced.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Findings and timing of a single executed check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub check_id: String,
    /// Enriched findings of this check, in the order it produced them.
    pub errors: Vec<Finding>,
    #[serde(serialize_with = "as_millis")]
    pub execution_time: Duration,
}

/// [`LintResult`] plus one [`CheckResult`] per check that ran.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedLintResult {
    pub result: LintResult,
    pub check_results: Vec<CheckResult>,
}

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_time_serialized_as_millis() {
        let result = LintResult {
            errors: Vec::new(),
            total_checks: 3,
            enabled_checks: 2,
            execution_time: Duration::from_micros(1500),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalChecks"], 3);
        assert_eq!(json["enabledChecks"], 2);
        assert_eq!(json["executionTime"].as_f64(), Some(1.5));
        assert!(result.is_clean());
    }
}
