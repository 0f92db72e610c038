//! Pretension, illogic, scare quotes, apologizing and metadiscourse.

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, Finding, Severity};

use super::{APOLOGIZING, ILLOGIC, METADISCOURSE, PRETENSION, SCARE_QUOTES};
use crate::support::sources;

const JARGON: &[&str] = &[
    "reconceptualize",
    "demassification",
    "attitudinally",
    "judgmentally",
    "utilize",
    "leverage",
    "synergy",
    "paradigm shift",
    "best practice",
    "going forward",
];

/// Pattern, message and optional replacement.
const ILLOGICAL: &[(&str, &str, Option<&str>)] = &[
    (r"\bpreplan\b", "'preplan' is illogical. Use 'plan'.", Some("plan")),
    (r"\bmore than .{1,10} all\b", "'more than...all' is illogical.", None),
    (
        r"\bappraisal valuations?\b",
        "'appraisal valuation' is redundant. Use 'appraisal' or 'valuation'.",
        None,
    ),
    (
        r"\b(?:I|you|he|she|it|they) could care less\b",
        "Use 'couldn't care less' (not 'could care less').",
        Some("couldn't care less"),
    ),
    (
        r"\bleast worst\b",
        "'least worst' is illogical. Use 'best' or 'least bad'.",
        None,
    ),
    (
        r"\bmuch-needed gaps?\b",
        "'much-needed gap' is illogical. Gaps are absences.",
        None,
    ),
    (
        r"\bmuch-needed voids?\b",
        "'much-needed void' is illogical. Voids are absences.",
        None,
    ),
    (
        r"\bno longer requires oxygen\b",
        "'no longer requires oxygen' is illogical (means dead).",
        None,
    ),
    (
        r"\bwithout scarcely\b",
        "'without scarcely' is a double negative.",
        None,
    ),
    (
        r"\bto coin a phrase from\b",
        "You can't coin an existing phrase. Did you mean 'borrow'?",
        None,
    ),
    (
        r"\bwithout your collusion\b",
        "It's impossible to defraud yourself. Try 'acquiescence'.",
        None,
    ),
];

const APOLOGIES: &[&str] = &[
    "More research is needed",
    "I'm sorry to say",
    "Unfortunately,",
    "Regrettably,",
];

const METADISCOURSE_PHRASES: &[&str] = &[
    "The preceeding discussion",
    "The rest of this article",
    "This chapter discusses",
    "The preceding paragraph demonstrated",
    "The previous section analyzed",
    "As mentioned before",
    "As I said earlier",
    "In the next section",
    "Later in this chapter",
];

pub fn check_pretension(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        JARGON,
        PRETENSION,
        "Jargon words like '{}' are the hallmarks of a pretentious ass.",
        &MatchOptions::new()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_source(sources::OGILVY),
    )
}

pub fn check_illogic(text: &str) -> Result<Vec<Finding>, CheckError> {
    let base = MatchOptions::new()
        .raw()
        .ignore_case()
        .with_source(sources::GARNER);

    let mut findings = Vec::new();
    for (pattern, message, replacement) in ILLOGICAL {
        let options = base.clone().with_replacements(*replacement);
        findings.extend(existence_check(text, &[*pattern], ILLOGIC, message, &options)?);
    }
    Ok(findings)
}

pub fn check_scare_quotes(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        &[r"\bthe 'take-home message'"],
        SCARE_QUOTES,
        "Misuse of 'scare quotes'. Delete them.",
        &MatchOptions::new()
            .raw()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_replacements(["the take-home message"])
            .with_source(sources::PINKER),
    )
}

pub fn check_apologizing(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        APOLOGIES,
        APOLOGIZING,
        "Excessive apologizing.",
        &MatchOptions::new()
            .raw()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_source(sources::PINKER),
    )
}

pub fn check_metadiscourse(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        METADISCOURSE_PHRASES,
        METADISCOURSE,
        "Excessive metadiscourse.",
        &MatchOptions::new()
            .raw()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_source(sources::PINKER),
    )
}
