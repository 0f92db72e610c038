//! The lint engine.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use proselint_plugin::{Check, CheckError, Finding};
use proselint_text::LineIndex;
use tracing::{debug, warn};

use crate::config::{LintConfig, LintConfigUpdate};
use crate::registry::CheckRegistry;
use crate::result::{CheckResult, DetailedLintResult, LintResult};

/// Runs the enabled checks of a registry against text.
///
/// The engine is synchronous and holds no locks; hosts that share one
/// across threads must serialize calls themselves.
#[derive(Debug)]
pub struct LintEngine {
    registry: CheckRegistry,
    config: LintConfig,
}

impl LintEngine {
    pub fn new(registry: CheckRegistry, config: LintConfig) -> Self {
        Self { registry, config }
    }

    /// Lints `text`.
    ///
    /// Checks run in registration order until the accumulated findings reach
    /// `maxErrors`; later checks are not run. A check that fails or panics
    /// is logged and contributes nothing. Findings are stably sorted by
    /// line and column, then truncated to `maxErrors`.
    pub fn lint(&self, text: &str) -> LintResult {
        self.run(text, false).result
    }

    /// Like [`lint`](Self::lint), but also reports each executed check's
    /// own findings and duration.
    pub fn lint_with_details(&self, text: &str) -> DetailedLintResult {
        self.run(text, true)
    }

    /// Replaces the config fields present in `update`.
    pub fn update_config(&mut self, update: LintConfigUpdate) {
        self.config.apply(update);
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CheckRegistry {
        &mut self.registry
    }

    fn run(&self, text: &str, details: bool) -> DetailedLintResult {
        let start = Instant::now();
        let max_errors = self.config.max_errors;
        let enabled = self.registry.get_enabled_checks(&self.config.checks);
        let lines = LineIndex::new(text);

        let mut errors: Vec<Finding> = Vec::new();
        let mut check_results = Vec::new();

        for &id in &enabled {
            if errors.len() >= max_errors {
                debug!(
                    "Error budget of {} reached; skipping remaining checks",
                    max_errors
                );
                break;
            }

            let (Some(check), Some(_)) = (
                self.registry.get_check(id),
                self.registry.get_check_metadata(id),
            ) else {
                continue;
            };

            let check_start = Instant::now();
            let mut check_errors = Vec::new();

            match run_isolated(check, text) {
                Ok(findings) => {
                    let severity_override = self.config.severity_override(id);
                    for mut finding in findings {
                        finding.loc = Some(lines.position(finding.span.start));
                        if let Some(severity) = severity_override {
                            finding.severity = severity;
                        }
                        check_errors.push(finding);
                    }
                }
                Err(e) => warn!("Check '{}' failed: {}", id, e),
            }

            let elapsed = check_start.elapsed();
            debug!(
                "Check '{}' produced {} findings in {:?}",
                id,
                check_errors.len(),
                elapsed
            );

            if details {
                check_results.push(CheckResult {
                    check_id: id.to_string(),
                    errors: check_errors.clone(),
                    execution_time: elapsed,
                });
            }
            errors.extend(check_errors);
        }

        errors.sort_by_key(|finding| (finding.line(), finding.column()));
        errors.truncate(max_errors);

        DetailedLintResult {
            result: LintResult {
                errors,
                total_checks: self.registry.get_check_count(),
                enabled_checks: enabled.len(),
                execution_time: start.elapsed(),
            },
            check_results,
        }
    }
}

/// Runs a check, turning a panic into an error.
fn run_isolated(check: &dyn Check, text: &str) -> Result<Vec<Finding>, CheckError> {
    panic::catch_unwind(AssertUnwindSafe(|| check.check(text)))
        .unwrap_or_else(|payload| Err(CheckError::failed(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proselint_ast::{Position, Span};
    use proselint_plugin::{CheckMetadata, Severity};

    use crate::matcher::{MatchOptions, existence_check};

    fn very(text: &str) -> Result<Vec<Finding>, CheckError> {
        existence_check(
            text,
            &["very"],
            "weasel_words.very",
            "Avoid '{}'.",
            &MatchOptions::default(),
        )
    }

    fn failing(_: &str) -> Result<Vec<Finding>, CheckError> {
        Err(CheckError::failed("boom"))
    }

    fn panicking(_: &str) -> Vec<Finding> {
        panic!("rule bug")
    }

    fn first_char(text: &str) -> Vec<Finding> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![Finding::new("test.first", "first", Span::new(0, 1)).with_severity(Severity::Error)]
    }

    fn engine_with(checks: &[(&str, fn(&str) -> Result<Vec<Finding>, CheckError>)]) -> LintEngine {
        let mut registry = CheckRegistry::new();
        for (id, check) in checks {
            registry.register_check(*id, *check, CheckMetadata::new(*id, "", "test"));
        }
        LintEngine::new(registry, LintConfig::default())
    }

    #[test]
    fn test_lint_enriches_findings() {
        let engine = engine_with(&[("weasel_words.very", very)]);
        let result = engine.lint("Fine.\nThis is very good.");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].loc, Some(Position::new(2, 9)));
        assert_eq!(result.total_checks, 1);
        assert_eq!(result.enabled_checks, 1);
    }

    #[test]
    fn test_failing_check_is_isolated() {
        let engine = engine_with(&[("test.failing", failing), ("weasel_words.very", very)]);
        let result = engine.lint("very");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].check_id, "weasel_words.very");
        assert_eq!(result.enabled_checks, 2);
    }

    #[test]
    fn test_panicking_check_is_isolated() {
        let mut registry = CheckRegistry::new();
        registry.register_check("test.panic", panicking, CheckMetadata::new("p", "", "test"));
        registry.register_check("weasel_words.very", very, CheckMetadata::new("v", "", "test"));
        let engine = LintEngine::new(registry, LintConfig::default());

        let result = engine.lint("very very");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_severity_override_applies() {
        let mut engine = engine_with(&[("weasel_words.very", very)]);
        engine.update_config(LintConfigUpdate {
            severity_overrides: Some([("weasel_words.very".to_string(), Severity::Error)].into()),
            ..Default::default()
        });

        let result = engine.lint("very very");
        assert!(result.errors.iter().all(|f| f.severity == Severity::Error));
    }

    #[test]
    fn test_budget_stops_later_checks() {
        let mut registry = CheckRegistry::new();
        registry.register_check("weasel_words.very", very, CheckMetadata::new("v", "", "t"));
        registry.register_check("test.first", first_char, CheckMetadata::new("f", "", "t"));
        let config = LintConfig {
            max_errors: 2,
            ..Default::default()
        };
        let engine = LintEngine::new(registry, config);

        let details = engine.lint_with_details("x very very very");

        assert_eq!(details.result.errors.len(), 2);
        assert_eq!(details.check_results.len(), 1);
        assert_eq!(details.check_results[0].check_id, "weasel_words.very");
        assert_eq!(details.check_results[0].errors.len(), 3);
        assert!(
            details
                .result
                .errors
                .iter()
                .all(|f| f.check_id == "weasel_words.very")
        );
    }

    #[test]
    fn test_zero_budget_runs_nothing() {
        let mut engine = engine_with(&[("weasel_words.very", very)]);
        engine.update_config(LintConfigUpdate {
            max_errors: Some(0),
            ..Default::default()
        });

        let details = engine.lint_with_details("very");
        assert!(details.result.errors.is_empty());
        assert!(details.check_results.is_empty());
    }

    #[test]
    fn test_sort_is_stable_across_checks() {
        let mut registry = CheckRegistry::new();
        registry.register_check("weasel_words.very", very, CheckMetadata::new("v", "", "t"));
        registry.register_check(
            "test.very_again",
            |text: &str| -> Result<Vec<Finding>, CheckError> {
                Ok(very(text)?
                    .into_iter()
                    .map(|mut f| {
                        f.check_id = "test.very_again".to_string();
                        f
                    })
                    .collect())
            },
            CheckMetadata::new("v2", "", "t"),
        );
        let engine = LintEngine::new(registry, LintConfig::default());

        let result = engine.lint("very\nvery");
        let ids: Vec<&str> = result.errors.iter().map(|f| f.check_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "weasel_words.very",
                "test.very_again",
                "weasel_words.very",
                "test.very_again"
            ]
        );
    }

    #[test]
    fn test_details_include_failing_checks() {
        let engine = engine_with(&[("test.failing", failing), ("weasel_words.very", very)]);
        let details = engine.lint_with_details("very");

        assert_eq!(details.check_results.len(), 2);
        assert!(details.check_results[0].errors.is_empty());
        assert_eq!(details.check_results[1].errors.len(), 1);
        assert_eq!(details.result.errors.len(), 1);
    }

    #[test]
    fn test_update_config_replaces_checks_map() {
        let mut engine = engine_with(&[("weasel_words.very", very)]);
        engine.update_config(LintConfigUpdate {
            checks: Some([("weasel_words.very".to_string(), false)].into()),
            ..Default::default()
        });
        assert!(engine.lint("very").errors.is_empty());
        assert_eq!(engine.lint("very").enabled_checks, 0);

        engine.update_config(LintConfigUpdate {
            checks: Some(Default::default()),
            ..Default::default()
        });
        assert_eq!(engine.lint("very").errors.len(), 1);
        assert_eq!(engine.config().max_errors, 100);
    }

    #[test]
    fn test_registry_mut_unregister() {
        let mut engine = engine_with(&[("weasel_words.very", very)]);
        engine.registry_mut().unregister_check("weasel_words.very");

        let result = engine.lint("very");
        assert!(result.errors.is_empty());
        assert_eq!(result.total_checks, 0);
        assert!(!engine.registry().has_check("weasel_words.very"));
    }

    #[test]
    fn test_unregistered_ids_in_config_are_ignored() {
        let mut engine = engine_with(&[("weasel_words.very", very)]);
        engine.update_config(LintConfigUpdate {
            checks: Some(
                [
                    ("weasel_words.very".to_string(), true),
                    ("removed.check".to_string(), true),
                ]
                .into(),
            ),
            ..Default::default()
        });

        let result = engine.lint("very");
        assert_eq!(result.enabled_checks, 1);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let engine = engine_with(&[("weasel_words.very", very)]);
        let result = engine.lint("");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("bad");
        assert_eq!(panic_message(payload.as_ref()), "panicked: bad");
        let payload: Box<dyn Any + Send> = Box::new(String::from("worse"));
        assert_eq!(panic_message(payload.as_ref()), "panicked: worse");
        let payload: Box<dyn Any + Send> = Box::new(3);
        assert_eq!(panic_message(payload.as_ref()), "panicked");
    }
}
