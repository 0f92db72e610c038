//! Lint command implementation

use std::fs;
use std::io;

use miette::{IntoDiagnostic, Result, miette};
use proselint_core::{CheckRegistry, LintConfig, LintEngine};
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::output::{FileReport, output_results};

/// Path argument that reads standard input.
const STDIN_PATH: &str = "-";

pub struct LintOptions {
    pub format: OutputFormat,
    pub max_errors: Option<usize>,
    pub details: bool,
    pub disable: Vec<String>,
}

pub fn run_lint(cli: &Cli, paths: &[String], options: &LintOptions) -> Result<bool> {
    let base = if let Some(ref path) = cli.config {
        LintConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let registry = proselint_rules::default_registry();
    let config = build_config(base, &registry, options);
    let engine = LintEngine::new(registry, config);

    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        match read_input(path) {
            Ok(text) => reports.push(lint_text(&engine, path, &text, options.details)),
            Err(e) => failures.push((path, e)),
        }
    }

    let has_errors = output_results(&reports, options.format, options.details)?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path, error);
        }
        return Err(miette!("{} file(s) could not be read", failures.len()));
    }

    Ok(has_errors)
}

pub fn find_config() -> Result<LintConfig> {
    if let Some(path) = LintConfig::find_in(".") {
        info!("Using config: {}", path.display());
        return LintConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LintConfig::new())
}

/// Seeds registry defaults, then applies command-line overrides.
fn build_config(base: LintConfig, registry: &CheckRegistry, options: &LintOptions) -> LintConfig {
    let mut config = base.with_registry_defaults(registry);

    if let Some(max_errors) = options.max_errors {
        config.max_errors = max_errors;
    }
    for id in &options.disable {
        if !registry.has_check(id) {
            warn!("Unknown check '{}'", id);
        }
        config.checks.insert(id.clone(), false);
    }

    config
}

fn read_input(path: &str) -> io::Result<String> {
    if path == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

fn lint_text(engine: &LintEngine, path: &str, text: &str, details: bool) -> FileReport {
    let path = if path == STDIN_PATH { "<stdin>" } else { path };

    if details {
        let detailed = engine.lint_with_details(text);
        FileReport {
            path: path.to_string(),
            result: detailed.result,
            check_results: Some(detailed.check_results),
        }
    } else {
        FileReport {
            path: path.to_string(),
            result: engine.lint(text),
            check_results: None,
        }
    }
}
