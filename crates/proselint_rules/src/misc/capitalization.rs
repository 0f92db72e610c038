//! Capitalization of proper nouns, seasons and months.

use proselint_core::matcher::{MatchContext, build_regex};
use proselint_core::{CheckError, Finding, Severity};

use super::CAPITALIZATION;
use crate::support::sources;

struct CapitalizationRule {
    wrong: &'static str,
    correct: &'static str,
    season: bool,
    /// Skips a match when the text right after it satisfies this test.
    unless_followed_by: Option<fn(&str) -> bool>,
}

impl CapitalizationRule {
    const fn new(wrong: &'static str, correct: &'static str) -> Self {
        Self {
            wrong,
            correct,
            season: false,
            unless_followed_by: None,
        }
    }

    const fn season(wrong: &'static str, correct: &'static str) -> Self {
        Self {
            season: true,
            ..Self::new(wrong, correct)
        }
    }

    const fn unless_followed_by(mut self, test: fn(&str) -> bool) -> Self {
        self.unless_followed_by = Some(test);
        self
    }

    fn message(&self) -> String {
        if self.season {
            format!(
                "Seasons shouldn't be capitalized. '{}' is the preferred form.",
                self.correct
            )
        } else {
            format!(
                "Incorrect capitalization. '{}' is the preferred form.",
                self.correct
            )
        }
    }
}

/// "Fall Semester", "Spring Break".
fn capitalized_word(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some(' ') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// "march 5 miles".
fn number(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some(' ') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// "may be", "may have", "may not".
fn modal_use(rest: &str) -> bool {
    [" be", " have", " not"]
        .iter()
        .any(|prefix| rest.starts_with(prefix))
}

const RULES: &[CapitalizationRule] = &[
    CapitalizationRule::new("mother nature", "Mother Nature"),
    CapitalizationRule::new("stone age", "Stone Age"),
    CapitalizationRule::new("the American west", "the American West"),
    CapitalizationRule::season("Winter", "winter"),
    CapitalizationRule::season("Summer", "summer"),
    CapitalizationRule::season("Fall", "fall").unless_followed_by(capitalized_word),
    CapitalizationRule::season("Spring", "spring").unless_followed_by(capitalized_word),
    CapitalizationRule::new("Space Age", "space age"),
    CapitalizationRule::new("january", "January"),
    CapitalizationRule::new("february", "February"),
    CapitalizationRule::new("march", "March").unless_followed_by(number),
    CapitalizationRule::new("april", "April"),
    CapitalizationRule::new("may", "May").unless_followed_by(modal_use),
    CapitalizationRule::new("june", "June"),
    CapitalizationRule::new("july", "July"),
    CapitalizationRule::new("august", "August"),
    CapitalizationRule::new("september", "September"),
    CapitalizationRule::new("october", "October"),
    CapitalizationRule::new("november", "November"),
    CapitalizationRule::new("december", "December"),
];

pub fn check_capitalization(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    for rule in RULES {
        let regex = build_regex(&format!(r"\b{}\b", regex::escape(rule.wrong)), false)?;
        for m in regex.find_iter(text) {
            if ctx.is_quoted(m.start()) {
                continue;
            }
            if rule
                .unless_followed_by
                .is_some_and(|test| test(&text[m.end()..]))
            {
                continue;
            }
            findings.push(
                ctx.finding(CAPITALIZATION, rule.message(), m.start(), m.end())
                    .with_severity(Severity::Suggestion)
                    .with_replacements([rule.correct])
                    .with_source(Some(sources::GARNER.to_string()), None),
            );
        }
    }

    Ok(findings)
}
