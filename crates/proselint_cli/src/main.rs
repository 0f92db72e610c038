//! proselint CLI
//!
//! Lints prose for style issues with the built-in rule library.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{LintOptions, run_init, run_lint, run_rules};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns true when an error-severity finding was reported.
fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint {
            paths,
            format,
            max_errors,
            details,
            disable,
        } => run_lint(
            &cli,
            paths,
            &LintOptions {
                format: *format,
                max_errors: *max_errors,
                details: *details,
                disable: disable.clone(),
            },
        ),
        Commands::Rules { category } => run_rules(category.as_deref()).map(|_| false),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}
