//! Finding types produced by checks.

use std::fmt;

use proselint_ast::{Position, Span};
use serde::{Deserialize, Serialize};

/// Severity level for findings.
///
/// Ordered by importance: `Suggestion < Warning < Error`. The order is used
/// for display and exit codes only, never for sorting findings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic advice.
    Suggestion,
    /// Should be reviewed.
    #[default]
    Warning,
    /// Should be fixed.
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Suggestion => "suggestion",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single issue detected by a check.
///
/// Checks create findings without a location; the engine fills in
/// [`Finding::loc`] from `span.start` before returning them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// The check that produced this finding.
    pub check_id: String,

    /// Human-readable description.
    pub message: String,

    /// UTF-16 range into the linted text.
    #[serde(flatten)]
    pub span: Span,

    /// `span.end - span.start`.
    pub extent: u32,

    /// Line/column of `span.start`.
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Position>,

    pub severity: Severity,

    /// Suggested literal replacements, best first.
    #[serde(default)]
    pub replacements: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Finding {
    /// Creates a finding with default severity and no replacements.
    pub fn new(check_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            check_id: check_id.into(),
            message: message.into(),
            span,
            extent: span.len(),
            loc: None,
            severity: Severity::default(),
            replacements: Vec::new(),
            source: None,
            source_url: None,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Position) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Sets the suggested replacements.
    pub fn with_replacements<I, S>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements = replacements.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the attribution.
    pub fn with_source(mut self, source: Option<String>, source_url: Option<String>) -> Self {
        self.source = source;
        self.source_url = source_url;
        self
    }

    /// Line of `span.start`, or 0 before enrichment.
    pub fn line(&self) -> u32 {
        self.loc.map_or(0, |loc| loc.line)
    }

    /// Column of `span.start`, or 0 before enrichment.
    pub fn column(&self) -> u32 {
        self.loc.map_or(0, |loc| loc.column)
    }
}
