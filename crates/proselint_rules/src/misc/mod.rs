//! Usage checks that belong to no larger family.

mod capitalization;
mod forms;
mod rhetoric;

use proselint_core::{CheckMetadata, CheckRegistry, Severity};

use crate::support::sources;

pub use capitalization::check_capitalization;
pub use forms::{check_phrasal_adjectives, check_preferred_forms};
pub use rhetoric::{
    check_apologizing, check_illogic, check_metadiscourse, check_pretension, check_scare_quotes,
};

pub const CATEGORY: &str = "misc";

pub const CAPITALIZATION: &str = "misc.capitalization";
pub const PREFERRED_FORMS: &str = "misc.preferred_forms";
pub const PHRASAL_ADJECTIVES: &str = "misc.phrasal_adjectives";
pub const PRETENSION: &str = "misc.pretension";
pub const ILLOGIC: &str = "misc.illogic";
pub const SCARE_QUOTES: &str = "misc.scare_quotes";
pub const APOLOGIZING: &str = "misc.apologizing";
pub const METADISCOURSE: &str = "misc.metadiscourse";

pub fn register(registry: &mut CheckRegistry) {
    let suggestion = |name: &str, description: &str, source: &str| {
        CheckMetadata::new(name, description, CATEGORY)
            .with_severity(Severity::Suggestion)
            .with_source(source)
    };

    registry.register_check(
        CAPITALIZATION,
        check_capitalization,
        suggestion(
            "Capitalization",
            "Check for incorrect capitalization of proper nouns, seasons, and months.",
            sources::GARNER,
        ),
    );
    registry.register_check(
        PREFERRED_FORMS,
        check_preferred_forms,
        suggestion(
            "Preferred Forms",
            "Check for non-standard forms of words and phrases.",
            sources::GARNER,
        ),
    );
    registry.register_check(
        PHRASAL_ADJECTIVES,
        check_phrasal_adjectives,
        suggestion(
            "Phrasal Adjectives",
            "Check for missing hyphens in compound modifiers.",
            sources::GARNER,
        ),
    );
    registry.register_check(
        PRETENSION,
        check_pretension,
        suggestion(
            "Pretentious Jargon",
            "Flag overly formal or pretentious language.",
            sources::OGILVY,
        ),
    );
    registry.register_check(
        ILLOGIC,
        check_illogic,
        CheckMetadata::new(
            "Illogical Constructions",
            "Flag logically inconsistent phrases and constructions.",
            CATEGORY,
        )
        .with_source(sources::GARNER),
    );
    registry.register_check(
        SCARE_QUOTES,
        check_scare_quotes,
        suggestion(
            "Scare Quotes",
            "Check for inappropriate use of scare quotes.",
            sources::PINKER,
        ),
    );
    registry.register_check(
        APOLOGIZING,
        check_apologizing,
        suggestion(
            "Excessive Apologizing",
            "Flag unnecessary apologetic phrases in writing.",
            sources::PINKER,
        ),
    );
    registry.register_check(
        METADISCOURSE,
        check_metadiscourse,
        suggestion(
            "Metadiscourse",
            "Flag excessive self-referential writing.",
            sources::PINKER,
        ),
    );
}
