//! # proselint_plugin
//!
//! The contract between checks and the lint engine.
//!
//! A check is any `Fn(&str)` returning findings, optionally wrapped in a
//! `Result`. Each check is registered with a [`CheckMetadata`] describing
//! its name, category and default severity.
//!
//! ## Example
//!
//! ```rust
//! use proselint_ast::Span;
//! use proselint_plugin::{Check, Finding, Severity};
//!
//! fn no_utilize(text: &str) -> Vec<Finding> {
//!     text.match_indices("utilize")
//!         .map(|(i, m)| {
//!             let span = Span::new(i as u32, (i + m.len()) as u32);
//!             Finding::new("misc.pretension", "Prefer 'use'", span)
//!                 .with_severity(Severity::Suggestion)
//!         })
//!         .collect()
//! }
//!
//! let findings = no_utilize.check("We utilize tools.").unwrap();
//! assert_eq!(findings[0].span, Span::new(3, 10));
//! ```

mod check;
mod diagnostic;
mod error;
mod metadata;

pub use check::{Check, IntoCheckOutcome};
pub use diagnostic::{Finding, Severity};
pub use error::CheckError;
pub use metadata::{CheckCategory, CheckMetadata, display_name};
