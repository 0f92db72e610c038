//! Spelling: frequent misspellings, typos and suffix confusions.
//!
//! All tables are matched case-sensitively and each entry suggests its
//! correction.

use proselint_core::matcher::MatchOptions;
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding};

use crate::support::{flag_corrections, sources};

pub const CATEGORY: &str = "spelling";

pub const MISSPELLINGS: &str = "spelling.misspellings";
pub const TYPOS: &str = "spelling.typos";
pub const ABLE_IBLE: &str = "spelling.able_ible";
pub const ER_OR: &str = "spelling.er_or";

const COMMON_MISSPELLINGS: &[(&str, &str)] = &[
    ("alot", "a lot"),
    ("accomodation", "accommodation"),
    ("arguement", "argument"),
    ("calender", "calendar"),
    ("definately", "definitely"),
    ("enviroment", "environment"),
    ("explaination", "explanation"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("maintainance", "maintenance"),
    ("neccessary", "necessary"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("recomend", "recommend"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("tommorrow", "tomorrow"),
    ("untill", "until"),
    ("wierd", "weird"),
    ("wellcome", "welcome"),
];

const COMMON_TYPOS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("adn", "and"),
    ("taht", "that"),
    ("thier", "their"),
    ("recieved", "received"),
    ("beleive", "believe"),
    ("acheive", "achieve"),
    ("occassion", "occasion"),
    ("occassional", "occasional"),
    ("embarass", "embarrass"),
    ("harrass", "harass"),
    ("wierd", "weird"),
    ("freind", "friend"),
    ("guarentee", "guarantee"),
    ("existance", "existence"),
    ("persistant", "persistent"),
    ("perseverence", "perseverance"),
    ("priviledge", "privilege"),
    ("publically", "publicly"),
    ("siezure", "seizure"),
];

const ABLE_IBLE_CONFUSIONS: &[(&str, &str)] = &[
    ("accessable", "accessible"),
    ("admissable", "admissible"),
    ("collectable", "collectible"),
    ("compatabile", "compatible"),
    ("comprehensable", "comprehensible"),
    ("convertable", "convertible"),
    ("defensable", "defensible"),
    ("digestable", "digestible"),
    ("distractable", "distractible"),
    ("exhaustable", "exhaustible"),
    ("expressable", "expressible"),
    ("flexable", "flexible"),
    ("inadmissable", "inadmissible"),
    ("indefensable", "indefensible"),
    ("inexhaustable", "inexhaustible"),
    ("inflexable", "inflexible"),
    ("irresistable", "irresistible"),
    ("permissable", "permissible"),
    ("resistable", "resistible"),
    ("reversable", "reversible"),
    ("sensable", "sensible"),
    ("suggestable", "suggestible"),
];

const ER_OR_CONFUSIONS: &[(&str, &str)] = &[
    ("advisior", "advisor"),
    ("assesser", "assessor"),
    ("contributer", "contributor"),
    ("councillar", "councilor"),
    ("counsellor", "counselor"),
    ("defendor", "defender"),
    ("dependor", "dependent"),
    ("distributer", "distributor"),
    ("editour", "editor"),
    ("investar", "investor"),
    ("oppresser", "oppressor"),
    ("possesser", "possessor"),
    ("professur", "professor"),
    ("protecter", "protector"),
    ("reflectar", "reflector"),
    ("successar", "successor"),
    ("supervisar", "supervisor"),
    ("survivour", "survivor"),
    ("transgressar", "transgressor"),
];

fn flag(
    text: &str,
    table: &[(&str, &str)],
    check_id: &str,
    message: &str,
    source: &str,
) -> Result<Vec<Finding>, CheckError> {
    flag_corrections(
        text,
        table,
        check_id,
        |_| message.to_string(),
        &MatchOptions::new().with_source(source),
    )
}

pub fn check_misspellings(text: &str) -> Result<Vec<Finding>, CheckError> {
    flag(
        text,
        COMMON_MISSPELLINGS,
        MISSPELLINGS,
        "Common misspelling: \"{}\". Check spelling.",
        sources::GARNER,
    )
}

pub fn check_typos(text: &str) -> Result<Vec<Finding>, CheckError> {
    flag(
        text,
        COMMON_TYPOS,
        TYPOS,
        "Possible typo: \"{}\". Did you mean something else?",
        sources::PROSELINT,
    )
}

pub fn check_able_ible(text: &str) -> Result<Vec<Finding>, CheckError> {
    flag(
        text,
        ABLE_IBLE_CONFUSIONS,
        ABLE_IBLE,
        "Spelling confusion: \"{}\". Check if this should end in -able or -ible.",
        sources::GARNER,
    )
}

pub fn check_er_or(text: &str) -> Result<Vec<Finding>, CheckError> {
    flag(
        text,
        ER_OR_CONFUSIONS,
        ER_OR,
        "Spelling confusion: \"{}\". Check if this should end in -er or -or.",
        sources::GARNER,
    )
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        MISSPELLINGS,
        check_misspellings,
        CheckMetadata::new(
            "Common Misspellings",
            "Checks for frequently misspelled words",
            CATEGORY,
        )
        .with_source(sources::GARNER),
    );
    registry.register_check(
        TYPOS,
        check_typos,
        CheckMetadata::new(
            "Common Typos",
            "Checks for common typing errors and transpositions",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        ABLE_IBLE,
        check_able_ible,
        CheckMetadata::new(
            "-able/-ible Confusion",
            "Checks for words confused between -able and -ible endings",
            CATEGORY,
        )
        .with_source(sources::GARNER),
    );
    registry.register_check(
        ER_OR,
        check_er_or,
        CheckMetadata::new(
            "-er/-or Confusion",
            "Checks for words confused between -er and -or endings",
            CATEGORY,
        )
        .with_source(sources::GARNER),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proselint_core::Severity;
    use rstest::rstest;

    #[test]
    fn test_misspelling_suggests_correction() {
        let findings = check_misspellings("I will recieve it tommorrow.").unwrap();

        assert_eq!(findings.len(), 2);
        // Table order, not text order.
        assert_eq!(findings[0].message, "Common misspelling: \"recieve\". Check spelling.");
        assert_eq!(findings[0].replacements, vec!["receive".to_string()]);
        assert_eq!(findings[1].replacements, vec!["tomorrow".to_string()]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[rstest]
    #[case::typo(check_typos, "Teh cat and teh dog.", 1)]
    #[case::able_ible(check_able_ible, "An irresistable offer.", 1)]
    #[case::er_or(check_er_or, "My advisior agreed.", 1)]
    #[case::correct_spelling(check_er_or, "My advisor agreed.", 0)]
    fn test_case_sensitive_tables(
        #[case] check: fn(&str) -> Result<Vec<Finding>, CheckError>,
        #[case] text: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(check(text).unwrap().len(), expected);
    }

    #[test]
    fn test_wierd_is_in_two_tables() {
        assert_eq!(check_misspellings("wierd").unwrap()[0].check_id, MISSPELLINGS);
        assert_eq!(check_typos("wierd").unwrap()[0].check_id, TYPOS);
    }
}
