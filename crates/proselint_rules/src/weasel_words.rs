//! Weasel words: vague intensifiers and evasive phrases.
//!
//! | Id | Severity | Case |
//! |----|----------|------|
//! | `weasel_words.very` | warning | sensitive |
//! | `weasel_words.misc` | warning | insensitive |
//! | `weasel_words.there_is` | suggestion | insensitive |

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding, Severity};

use crate::support::sources;

pub const CATEGORY: &str = "weasel_words";

pub const VERY: &str = "weasel_words.very";
pub const MISC: &str = "weasel_words.misc";
pub const THERE_IS: &str = "weasel_words.there_is";

const WEASEL_WORDS: &[&str] = &[
    "many",
    "various",
    "fairly",
    "several",
    "extremely",
    "exceedingly",
    "quite",
    "remarkably",
    "few",
    "surprisingly",
    "mostly",
    "largely",
    "huge",
    "tiny",
    "excellent",
    "interestingly",
    "significantly",
    "substantially",
    "clearly",
    "vast",
    "relatively",
    "completely",
    "a number of",
    "all things being equal",
    "as a matter of fact",
    "at the end of the day",
    "by and large",
    "for all intents and purposes",
    "in a very real sense",
    "in fact",
    "in general",
    "in my opinion",
    "it could be argued that",
    "it goes without saying",
    "it has been shown",
    "it is believed",
    "it is clear that",
    "it is generally accepted",
    "it is important to note",
    "it is interesting to note",
    "it is known that",
    "it is obvious that",
    "it is recognized that",
    "it is worth noting",
    "it may be said",
    "it might be argued",
    "it should be noted",
    "needless to say",
    "to be sure",
    "without a doubt",
    "are a number",
    "is a number",
];

const THERE_IS_FORMS: &[&str] = &[
    "there is",
    "there are",
    "there was",
    "there were",
    "there will be",
    "there would be",
    "there has been",
    "there have been",
    "there had been",
];

/// Flags "very", a weak intensifier.
pub fn check_very(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        &["very"],
        VERY,
        "\"Very\" is a weak intensifier. Consider removing it or using a stronger word.",
        &MatchOptions::new().with_source(sources::PROSELINT),
    )
}

pub fn check_weasel_words(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        WEASEL_WORDS,
        MISC,
        "Weasel word detected: \"{}\". Consider being more specific.",
        &MatchOptions::new()
            .ignore_case()
            .with_source(sources::PROSELINT),
    )
}

pub fn check_there_is(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        THERE_IS_FORMS,
        THERE_IS,
        "\"There is/are\" construction detected: \"{}\". Consider a more direct approach.",
        &MatchOptions::new()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_source(sources::PROSELINT),
    )
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        VERY,
        check_very,
        CheckMetadata::new(
            "Remove \"Very\"",
            "\"Very\" is a weak intensifier. Consider removing it or using a stronger word.",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        MISC,
        check_weasel_words,
        CheckMetadata::new(
            "Weasel Words",
            "Detect vague, imprecise language that weakens writing.",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        THERE_IS,
        check_there_is,
        CheckMetadata::new(
            "There Is/Are Constructions",
            "Detect \"there is/are\" constructions that often indicate weak writing.",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::PROSELINT),
    );
}
