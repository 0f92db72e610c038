//! Output formatting module

mod json;
mod text;

use miette::Result;
use proselint_core::{CheckResult, LintResult, Severity};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Lint outcome of one input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub result: LintResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_results: Option<Vec<CheckResult>>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.result
            .errors
            .iter()
            .any(|finding| finding.severity == Severity::Error)
    }
}

/// Prints `reports` and returns true if any has an error-severity finding.
pub fn output_results(reports: &[FileReport], format: OutputFormat, details: bool) -> Result<bool> {
    let has_errors = reports.iter().any(FileReport::has_errors);

    match format {
        OutputFormat::Json => json::output_json(reports)?,
        OutputFormat::Text => text::output_text(reports, details),
    }

    Ok(has_errors)
}
