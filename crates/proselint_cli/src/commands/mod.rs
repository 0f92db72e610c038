//! Sub-command implementations

mod init;
mod lint;
mod rules;

pub use init::run_init;
pub use lint::{LintOptions, run_lint};
pub use rules::run_rules;
