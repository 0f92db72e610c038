//! Preferred forms and phrasal adjectives.

use proselint_core::matcher::{FormOptions, MatchContext, MatchOptions, preferred_forms_check};
use proselint_core::{CheckError, Finding, Severity};

use super::{PHRASAL_ADJECTIVES, PREFERRED_FORMS};
use crate::support::{CachedRegex, cached_regex, flag_corrections, sources};

/// Preferred form and the variants (as regexes) it replaces.
const PREFERRED: &[(&str, &[&str])] = &[
    ("imprimatur", &["imprimature"]),
    ("Halloween", &["hallowe'en", "haloween"]),
    ("Khrushchev", &["khruschev", "kruschev"]),
    ("Ku Klux Klan", &["klu klux klan"]),
    ("Pontius Pilate", &["pontius pilot"]),
    ("hippopotamuses", &["hippopotami"]),
    ("manifestos", &["manifesti"]),
    ("matrices", &["matrixes"]),
    ("mongooses", &["mongeese"]),
    ("narcissi", &["narcissuses"]),
    ("retinas", &["retinae"]),
    ("sopranos", &["soprani"]),
    ("titmice", &["titmouses"]),
    ("long-standing", &["longstanding"]),
    ("non sequitur", &["non-sequitur"]),
    ("sans serif", &["sans-serif", "sanserif"]),
    ("tortfeasor", &["tort feasor", "tort-feasor"]),
    ("transship", &["trans-ship", "tranship"]),
    ("transshipped", &["trans-shipped", "transhipped"]),
    ("transshipping", &["trans-shipping", "transhipping"]),
    ("attitude", &["mental attitude"]),
    (
        "Chief Justice of the United States",
        &["chief justice of the united states supreme court"],
    ),
    ("many", &["a lot of"]),
    ("each", &["each and every"]),
    ("and so on", &[r"etc\."]),
    ("to", &["in order to"]),
    ("before", &["prior to"]),
    ("after", &["subsequent to"]),
];

const PHRASAL: &[(&str, &str)] = &[
    ("across the board discounts", "across-the-board discounts"),
    ("big ticket item", "big-ticket item"),
    ("class action lawyer", "class-action lawyer"),
    ("cut and dried", "cut-and-dried"),
    ("face to face meeting", "face-to-face meeting"),
    ("fixed rate mortgage", "fixed-rate mortgage"),
    ("for profit", "for-profit"),
    ("free range chicken", "free-range chicken"),
    ("head on collision", "head-on collision"),
    ("head to head", "head-to-head"),
    ("health care coverage", "health-care coverage"),
    ("high school student", "high-school student"),
    ("hit and run", "hit-and-run"),
    ("long term care", "long-term care"),
    ("low income housing", "low-income housing"),
    ("mom and pop shop", "mom-and-pop shop"),
    ("no fault", "no-fault"),
    ("non profit", "non-profit"),
    ("one way", "one-way"),
    ("open and shut case", "open-and-shut case"),
    ("open source", "open-source"),
    ("real estate", "real-estate"),
    ("right wing", "right-wing"),
    ("round trip", "round-trip"),
    ("second largest", "second-largest"),
    ("small business", "small-business"),
    ("state sponsored", "state-sponsored"),
    ("time honored", "time-honored"),
    ("well known", "well-known"),
    ("well publicized", "well-publicized"),
    ("zero sum game", "zero-sum game"),
    ("first quarter gain", "first-quarter gain"),
    ("first quarter loss", "first-quarter loss"),
    ("second quarter gain", "second-quarter gain"),
    ("second quarter loss", "second-quarter loss"),
    ("third quarter gain", "third-quarter gain"),
    ("third quarter loss", "third-quarter loss"),
    ("fourth quarter gain", "fourth-quarter gain"),
    ("fourth quarter loss", "fourth-quarter loss"),
    ("three part harmony", "three-part harmony"),
    ("four part harmony", "four-part harmony"),
];

static LY_HYPHEN: CachedRegex = CachedRegex::new();

pub fn check_preferred_forms(text: &str) -> Result<Vec<Finding>, CheckError> {
    preferred_forms_check(
        text,
        PREFERRED,
        PREFERRED_FORMS,
        "'{}' is the preferred form.",
        &FormOptions::new()
            .ignore_case()
            .with_source(sources::GARNER),
    )
}

pub fn check_phrasal_adjectives(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    // "a highly-regarded author": the match starts at the whitespace, which
    // is not part of the finding.
    let ly = cached_regex(&LY_HYPHEN, r"\s[^\s-]+ly-", false)?;
    for m in ly.find_iter(text) {
        let lead = m.as_str().chars().next().map_or(0, char::len_utf8);
        let start = m.start() + lead;
        if ctx.is_quoted(start) {
            continue;
        }
        findings.push(
            ctx.finding(
                PHRASAL_ADJECTIVES,
                "No hyphen is necessary in phrasal adjectives with an adverb ending in -ly.",
                start,
                m.end(),
            )
            .with_severity(Severity::Suggestion)
            .with_source(Some(sources::GARNER.to_string()), None),
        );
    }

    findings.extend(flag_corrections(
        text,
        PHRASAL,
        PHRASAL_ADJECTIVES,
        |correct| format!("Hyphenate '{{}}', a phrasal adjective, as '{correct}'."),
        &MatchOptions::new()
            .ignore_case()
            .with_severity(Severity::Suggestion)
            .with_source(sources::GARNER),
    )?);

    Ok(findings)
}
