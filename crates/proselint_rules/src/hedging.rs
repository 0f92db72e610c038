//! Hedging and filler words.

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding, Severity};

use crate::support::sources;

pub const CATEGORY: &str = "hedging";

pub const MISC: &str = "hedging.misc";
pub const FILLER_WORDS: &str = "hedging.filler_words";

const HEDGES: &[&str] = &[
    "I would argue that",
    "I believe that",
    "I think that",
    "I feel that",
    "I suppose",
    "I guess",
    "in my opinion",
    "it seems to me",
    "it appears that",
    "it could be argued",
    "it might be said",
    "it is possible that",
    "it is likely that",
    "perhaps",
    "maybe",
    "possibly",
    "probably",
    "presumably",
    "apparently",
    "seemingly",
    "allegedly",
    "supposedly",
    "sort of",
    "kind of",
    "rather",
    "quite",
    "somewhat",
    "fairly",
    "pretty much",
    "more or less",
    "to some extent",
    "to a certain degree",
    "in a sense",
    "in a way",
    "so to speak",
    "as it were",
    "if you will",
    "to be honest",
    "to tell the truth",
    "frankly speaking",
    "generally speaking",
    "broadly speaking",
    "roughly speaking",
];

const FILLERS: &[&str] = &[
    "actually",
    "basically",
    "literally",
    "obviously",
    "clearly",
    "certainly",
    "definitely",
    "absolutely",
    "totally",
    "completely",
    "really",
    "truly",
    "honestly",
    "frankly",
    "seriously",
    "essentially",
    "fundamentally",
    "ultimately",
    "particularly",
    "especially",
    "specifically",
    "generally",
    "typically",
    "usually",
    "normally",
    "naturally",
];

fn options() -> MatchOptions {
    MatchOptions::new()
        .ignore_case()
        .with_severity(Severity::Suggestion)
        .with_source(sources::PROSELINT)
}

pub fn check_hedging(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        HEDGES,
        MISC,
        "Hedging language detected: \"{}\". Consider stating this more confidently.",
        &options(),
    )
}

pub fn check_filler_words(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        FILLERS,
        FILLER_WORDS,
        "Filler word detected: \"{}\". Consider removing for stronger writing.",
        &options(),
    )
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        MISC,
        check_hedging,
        CheckMetadata::new(
            "Hedging Language",
            "Detect uncertain, tentative language that undermines confidence.",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        FILLER_WORDS,
        check_filler_words,
        CheckMetadata::new(
            "Filler Words",
            "Detect filler words that weaken writing.",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::PROSELINT),
    );
}
