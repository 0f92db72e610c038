//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// proselint - A linter for prose
#[derive(Parser)]
#[command(name = "proselint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files to lint ("-" reads standard input)
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Maximum number of findings per file
        #[arg(long, value_name = "N")]
        max_errors: Option<usize>,

        /// Report per-check findings and timings
        #[arg(long)]
        details: bool,

        /// Disable a check by id (repeatable)
        #[arg(long, value_name = "ID")]
        disable: Vec<String>,
    },

    /// List available checks
    Rules {
        /// Only list checks in this category
        #[arg(long, value_name = "KEY")]
        category: Option<String>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lint_args() {
        let cli = Cli::parse_from([
            "proselint",
            "lint",
            "a.txt",
            "-",
            "--format",
            "json",
            "--disable",
            "weasel_words.very",
            "--disable",
            "hedging.misc",
            "--max-errors",
            "5",
        ]);

        let Commands::Lint {
            paths,
            format,
            max_errors,
            details,
            disable,
        } = cli.command
        else {
            panic!("expected lint command");
        };
        assert_eq!(paths, vec!["a.txt", "-"]);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(max_errors, Some(5));
        assert!(!details);
        assert_eq!(disable, vec!["weasel_words.very", "hedging.misc"]);
    }
}
