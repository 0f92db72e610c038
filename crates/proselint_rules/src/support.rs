//! Helpers shared by rule families.

use std::sync::OnceLock;

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, Finding};
use regex::{Regex, RegexBuilder};

/// Attribution strings.
pub(crate) mod sources {
    pub const PROSELINT: &str = "proselint";
    pub const GARNER: &str = "Garner's Modern American Usage";
    pub const GLAAD: &str = "GLAAD Media Reference Guide";
    pub const PINKER: &str = "Pinker's \"The Sense of Style\"";
    pub const OGILVY: &str = "David Ogilvy";
    pub const BUTTERICK: &str = "Butterick's Practical Typography";
    pub const CHICAGO: &str = "Chicago Manual of Style";
}

/// A lazily compiled regex whose compile error is kept and reported on
/// every use.
pub(crate) type CachedRegex = OnceLock<Result<Regex, regex::Error>>;

pub(crate) fn cached_regex(
    cell: &'static CachedRegex,
    pattern: &str,
    ignore_case: bool,
) -> Result<&'static Regex, CheckError> {
    cell.get_or_init(|| {
        RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
    })
    .as_ref()
    .map_err(|e| CheckError::Pattern(e.clone()))
}

/// Runs [`existence_check`] once per `(wrong, correct)` entry, suggesting
/// `correct`. `message` builds the template from the correct form.
pub(crate) fn flag_corrections(
    text: &str,
    table: &[(&str, &str)],
    check_id: &str,
    message: impl Fn(&str) -> String,
    options: &MatchOptions,
) -> Result<Vec<Finding>, CheckError> {
    let mut findings = Vec::new();
    for (wrong, correct) in table {
        let options = options.clone().with_replacements([*correct]);
        findings.extend(existence_check(
            text,
            &[*wrong],
            check_id,
            &message(*correct),
            &options,
        )?);
    }
    Ok(findings)
}
