//! # proselint_rules
//!
//! The built-in rule library: about thirty checks grouped into families.
//! Each family module exposes its check functions, its ids as constants and
//! a `register` function; [`register_all`] registers every family.
//!
//! ```
//! use proselint_core::{LintConfig, LintEngine};
//!
//! let engine = LintEngine::new(proselint_rules::default_registry(), LintConfig::default());
//! let result = engine.lint("We need advance planning.");
//! assert_eq!(result.errors[0].check_id, "redundancy.misc");
//! ```

pub mod cliches;
pub mod hedging;
pub mod misc;
pub mod passive_voice;
pub mod redundancy;
pub mod social_awareness;
pub mod spelling;
pub mod typography;
pub mod weasel_words;

mod support;

use proselint_core::CheckRegistry;

/// Registers every built-in check.
pub fn register_all(registry: &mut CheckRegistry) {
    weasel_words::register(registry);
    redundancy::register(registry);
    hedging::register(registry);
    cliches::register(registry);
    passive_voice::register(registry);
    typography::register(registry);
    spelling::register(registry);
    misc::register(registry);
    social_awareness::register(registry);
}

/// A registry holding every built-in check.
pub fn default_registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    register_all(&mut registry);
    registry
}
