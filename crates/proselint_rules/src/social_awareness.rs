//! Gendered, LGBTQ+ and racial terminology.

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding, Severity};

use crate::support::{flag_corrections, sources};

pub const CATEGORY: &str = "social_awareness";

pub const SEXISM: &str = "social_awareness.sexism";
pub const LGBTQ: &str = "social_awareness.lgbtq";
pub const NWORD: &str = "social_awareness.nword";

const GENDERED: &[(&str, &str)] = &[
    ("anchorman", "anchor"),
    ("anchorwoman", "anchor"),
    ("anchorperson", "anchor"),
    ("chairman", "chair"),
    ("chairwoman", "chair"),
    ("chairperson", "chair"),
    ("draftman", "drafter"),
    ("draftwoman", "drafter"),
    ("draftperson", "drafter"),
    ("ombudsman", "ombuds"),
    ("ombudswoman", "ombuds"),
    ("ombudsperson", "ombuds"),
    ("tribesman", "tribe member"),
    ("tribeswoman", "tribe member"),
    ("tribesperson", "tribe member"),
    ("policeman", "police officer"),
    ("policewoman", "police officer"),
    ("policeperson", "police officer"),
    ("fireman", "firefighter"),
    ("firewoman", "firefighter"),
    ("fireperson", "firefighter"),
    ("mailman", "mail carrier"),
    ("mailwoman", "mail carrier"),
    ("mailperson", "mail carrier"),
    ("poetess", "poet"),
    ("authoress", "author"),
    ("waitress", "waiter"),
    ("comedienne", "comedian"),
    ("confidante", "confidant"),
    ("executrix", "executor"),
    ("prosecutrix", "prosecutor"),
    ("testatrix", "testator"),
    // phrases
    ("man and wife", "husband and wife"),
    ("chairmen and chairs", "chairs"),
    ("men and girls", "men and women"),
    ("lady lawyer", "lawyer"),
    ("woman doctor", "doctor"),
    ("female booksalesman", "bookseller"),
    ("female airman", "air pilot"),
    ("woman scientist", "scientist"),
    ("women scientists", "scientists"),
    ("herstory", "history"),
    ("womyn", "women"),
];

const LGBTQ_PREFERRED: &[(&str, &str)] = &[
    ("homosexual man", "gay man"),
    ("homosexual men", "gay men"),
    ("homosexual woman", "lesbian"),
    ("homosexual women", "lesbians"),
    ("homosexual people", "gay people"),
    ("homosexual couple", "gay couple"),
    ("sexual preference", "sexual orientation"),
    ("admitted homosexual", "openly gay"),
    ("avowed homosexual", "openly gay"),
    ("special rights", "equal rights"),
];

const LGBTQ_OFFENSIVE: &[&str] = &[
    "faggot",
    "dyke",
    "sodomite",
    "homosexual agenda",
    "gay agenda",
    "transvestite",
    "homosexual lifestyle",
    "gay lifestyle",
];

pub fn check_sexism(text: &str) -> Result<Vec<Finding>, CheckError> {
    flag_corrections(
        text,
        GENDERED,
        SEXISM,
        |correct| format!("Gender bias. Use '{correct}' instead of '{{}}'."),
        &MatchOptions::new().ignore_case().with_source(sources::GARNER),
    )
}

/// Outdated terms suggest a replacement; slurs are reported as errors.
pub fn check_lgbtq(text: &str) -> Result<Vec<Finding>, CheckError> {
    let mut findings = flag_corrections(
        text,
        LGBTQ_PREFERRED,
        LGBTQ,
        |correct| format!("Possibly offensive term. Consider using '{correct}' instead of '{{}}'."),
        &MatchOptions::new().ignore_case().with_source(sources::GLAAD),
    )?;
    findings.extend(existence_check(
        text,
        LGBTQ_OFFENSIVE,
        LGBTQ,
        "Offensive term. Remove it or consider the context.",
        &MatchOptions::new()
            .ignore_case()
            .with_severity(Severity::Error)
            .with_source(sources::GLAAD),
    )?);
    Ok(findings)
}

pub fn check_nword(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        &[r"\bthe n-?word\b"],
        NWORD,
        "Take responsibility for the words you want to say.",
        &MatchOptions::new()
            .raw()
            .ignore_case()
            .with_source(sources::PROSELINT),
    )
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        SEXISM,
        check_sexism,
        CheckMetadata::new(
            "Gender-Neutral Language",
            "Flag gendered language that could be made more inclusive.",
            CATEGORY,
        )
        .with_source(sources::GARNER),
    );
    registry.register_check(
        LGBTQ,
        check_lgbtq,
        CheckMetadata::new(
            "LGBTQ+ Inclusive Language",
            "Flag potentially offensive or outdated LGBTQ+ terminology.",
            CATEGORY,
        )
        .with_source(sources::GLAAD),
    );
    registry.register_check(
        NWORD,
        check_nword,
        CheckMetadata::new(
            "Race/Ethnicity Sensitivity",
            "Flag euphemistic references to offensive racial language.",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
}
