//! # proselint_core
//!
//! Core of the prose linter.
//!
//! This crate provides:
//! - [`CheckRegistry`]: the catalog of checks and their metadata
//! - [`LintEngine`]: runs enabled checks, resolves positions, applies
//!   severity overrides and the error budget
//! - [`LintConfig`]: configuration loading with schema validation
//! - [`matcher`]: the primitives every rule is built from
//!
//! ## Example
//!
//! ```rust
//! use proselint_core::matcher::{MatchOptions, existence_check};
//! use proselint_core::{CheckMetadata, CheckRegistry, LintConfig, LintEngine};
//!
//! let mut registry = CheckRegistry::new();
//! registry.register_check(
//!     "weasel_words.very",
//!     |text: &str| {
//!         existence_check(text, &["very"], "weasel_words.very", "Avoid '{}'.", &MatchOptions::default())
//!     },
//!     CheckMetadata::new("Very", "Flags 'very'", "weasel_words"),
//! );
//!
//! let engine = LintEngine::new(registry, LintConfig::default());
//! let result = engine.lint("This is very good.");
//! assert_eq!(result.errors.len(), 1);
//! assert_eq!(result.errors[0].column(), 9);
//! ```

mod config;
mod engine;
mod error;
pub mod matcher;
mod registry;
mod result;

pub use config::{CONFIG_FILE_NAMES, DEFAULT_MAX_ERRORS, LintConfig, LintConfigUpdate};
pub use engine::LintEngine;
pub use error::LinterError;
pub use registry::CheckRegistry;
pub use result::{CheckResult, DetailedLintResult, LintResult};

pub use proselint_ast::{Position, Span};
pub use proselint_plugin::{Check, CheckCategory, CheckError, CheckMetadata, Finding, Severity};
