//! Typography: dashes, ellipses and symbol approximations.
//!
//! These checks look at punctuation rather than words, so they report
//! matches inside quotations too.

use proselint_core::matcher::MatchContext;
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding, Severity};
use regex::Captures;

use crate::support::{CachedRegex, cached_regex, sources};

pub const CATEGORY: &str = "typography";

pub const DASHES_MULTIPLE: &str = "typography.dashes.multiple";
pub const DASHES_RANGES: &str = "typography.dashes.ranges";
pub const ELLIPSIS: &str = "typography.ellipsis";
pub const SYMBOLS: &str = "typography.symbols";

static THREE_HYPHENS: CachedRegex = CachedRegex::new();
static TWO_HYPHENS: CachedRegex = CachedRegex::new();
static TWO_HYPHENS_SPACED: CachedRegex = CachedRegex::new();
static YEAR_RANGE: CachedRegex = CachedRegex::new();
static NUMBER_RANGE: CachedRegex = CachedRegex::new();
static THREE_DOTS: CachedRegex = CachedRegex::new();
static COPYRIGHT: CachedRegex = CachedRegex::new();
static TRADEMARK: CachedRegex = CachedRegex::new();
static REGISTERED: CachedRegex = CachedRegex::new();
static MULTIPLICATION: CachedRegex = CachedRegex::new();

/// One regex pass: every match goes through `build`, which may drop it.
fn scan(
    ctx: &MatchContext<'_>,
    findings: &mut Vec<Finding>,
    (cell, pattern, ignore_case): (&'static CachedRegex, &str, bool),
    build: impl Fn(&Captures<'_>) -> Option<Finding>,
) -> Result<(), CheckError> {
    let regex = cached_regex(cell, pattern, ignore_case)?;
    findings.extend(
        regex
            .captures_iter(ctx.text())
            .filter(|caps| caps.get(0).is_some_and(|m| !m.is_empty()))
            .filter_map(|caps| build(&caps)),
    );
    Ok(())
}

/// Finding over the whole match of `caps`.
fn whole_match(
    ctx: &MatchContext<'_>,
    caps: &Captures<'_>,
    check_id: &str,
    message: &str,
    source: &str,
) -> Option<Finding> {
    let m = caps.get(0)?;
    Some(
        ctx.finding(check_id, message, m.start(), m.end())
            .with_severity(Severity::Suggestion)
            .with_source(Some(source.to_string()), None),
    )
}

/// Joins the two numeric or word captures around a replacement dash.
fn joined(caps: &Captures<'_>, separator: &str) -> Option<String> {
    Some(format!("{}{separator}{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub fn check_multiple_hyphens(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    scan(&ctx, &mut findings, (&THREE_HYPHENS, "---", false), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                DASHES_MULTIPLE,
                "Use an em dash (—) instead of three hyphens (---)",
                sources::BUTTERICK,
            )?
            .with_replacements(["—"]),
        )
    })?;

    scan(&ctx, &mut findings, (&TWO_HYPHENS, r"(\w)--(\w)", false), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                DASHES_MULTIPLE,
                "Use an em dash (—) instead of two hyphens (--)",
                sources::CHICAGO,
            )?
            .with_replacements([joined(caps, "—")?]),
        )
    })?;

    scan(&ctx, &mut findings, (&TWO_HYPHENS_SPACED, r"\s--\s", false), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                DASHES_MULTIPLE,
                "Use an em dash (—) instead of two hyphens (--)",
                sources::CHICAGO,
            )?
            .with_replacements([" — ", "—"]),
        )
    })?;

    Ok(findings)
}

pub fn check_range_dashes(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    scan(&ctx, &mut findings, (&YEAR_RANGE, r"(\d{4})-(\d{4})", false), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                DASHES_RANGES,
                "Use an en dash (–) for year ranges, not a hyphen",
                sources::CHICAGO,
            )?
            .with_replacements([joined(caps, "–")?]),
        )
    })?;

    scan(&ctx, &mut findings, (&NUMBER_RANGE, r"\b(\d+)-(\d+)\b", false), |caps| {
        // Year ranges were reported above.
        let is_year_range =
            caps.get(1)?.as_str().len() == 4 && caps.get(2)?.as_str().len() == 4;
        if is_year_range {
            return None;
        }
        Some(
            whole_match(
                &ctx,
                caps,
                DASHES_RANGES,
                "Use an en dash (–) for number ranges, not a hyphen",
                sources::CHICAGO,
            )?
            .with_replacements([joined(caps, "–")?]),
        )
    })?;

    Ok(findings)
}

pub fn check_ellipsis(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    scan(&ctx, &mut findings, (&THREE_DOTS, r"\.\.\.", false), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                ELLIPSIS,
                "\"...\" is an approximation. Use the ellipsis symbol \"…\"",
                sources::BUTTERICK,
            )?
            .with_replacements(["…"]),
        )
    })?;

    Ok(findings)
}

pub fn check_symbols(text: &str) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    let approximations: [(&'static CachedRegex, &str, &str, &str); 3] = [
        (
            &COPYRIGHT,
            r"\(c\)",
            "(c) is an alphabetic approximation. Use the copyright symbol ©",
            "©",
        ),
        (
            &TRADEMARK,
            r"\(tm\)",
            "(TM) is an alphabetic approximation. Use the trademark symbol ™",
            "™",
        ),
        (
            &REGISTERED,
            r"\(r\)",
            "(R) is an alphabetic approximation. Use the registered trademark symbol ®",
            "®",
        ),
    ];

    for (cell, pattern, message, symbol) in approximations {
        scan(&ctx, &mut findings, (cell, pattern, true), |caps| {
            Some(
                whole_match(&ctx, caps, SYMBOLS, message, sources::BUTTERICK)?
                    .with_replacements([symbol]),
            )
        })?;
    }

    scan(&ctx, &mut findings, (&MULTIPLICATION, r"\b(\d+) ?x ?(\d+)\b", true), |caps| {
        Some(
            whole_match(
                &ctx,
                caps,
                SYMBOLS,
                "Use the multiplication symbol ×, not the letter x",
                sources::BUTTERICK,
            )?
            .with_replacements([joined(caps, " × ")?]),
        )
    })?;

    Ok(findings)
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        DASHES_MULTIPLE,
        check_multiple_hyphens,
        CheckMetadata::new(
            "Multiple Hyphens",
            "Checks for multiple hyphens that should be em dashes (—)",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::CHICAGO),
    );
    registry.register_check(
        DASHES_RANGES,
        check_range_dashes,
        CheckMetadata::new(
            "Dash in Ranges",
            "Checks for hyphens in ranges that should be en dashes (–)",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::CHICAGO),
    );
    registry.register_check(
        ELLIPSIS,
        check_ellipsis,
        CheckMetadata::new(
            "Ellipsis",
            "Checks for three dots (...) that should be an ellipsis character (…)",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::BUTTERICK),
    );
    registry.register_check(
        SYMBOLS,
        check_symbols,
        CheckMetadata::new(
            "Symbols",
            "Checks for alphabetic approximations of symbols (©, ®, ™, ×)",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::BUTTERICK),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(findings: &[Finding]) -> Vec<(u32, u32)> {
        findings.iter().map(|f| (f.span.start, f.span.end)).collect()
    }

    #[test]
    fn test_three_hyphens() {
        let findings = check_multiple_hyphens("Wait---what?").unwrap();
        assert_eq!(spans(&findings), vec![(4, 7)]);
        assert_eq!(findings[0].replacements, vec!["—".to_string()]);
        assert_eq!(findings[0].source.as_deref(), Some(sources::BUTTERICK));
    }

    #[test]
    fn test_two_hyphens_between_words() {
        let findings = check_multiple_hyphens("word--word").unwrap();
        assert_eq!(spans(&findings), vec![(3, 7)]);
        assert_eq!(findings[0].replacements, vec!["d—w".to_string()]);
    }

    #[test]
    fn test_two_hyphens_spaced() {
        let findings = check_multiple_hyphens("yes -- no").unwrap();
        assert_eq!(spans(&findings), vec![(3, 7)]);
        assert_eq!(
            findings[0].replacements,
            vec![" — ".to_string(), "—".to_string()]
        );
    }

    #[test]
    fn test_ranges() {
        let findings = check_range_dashes("From 2020-2024, pages 10-20.").unwrap();

        assert_eq!(spans(&findings), vec![(5, 14), (22, 27)]);
        assert_eq!(findings[0].replacements, vec!["2020–2024".to_string()]);
        assert_eq!(
            findings[0].message,
            "Use an en dash (–) for year ranges, not a hyphen"
        );
        assert_eq!(findings[1].replacements, vec!["10–20".to_string()]);
    }

    #[test]
    fn test_ellipsis_not_exempt_in_quotes() {
        let findings = check_ellipsis("She said \"well...\" and left...").unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].replacements, vec!["…".to_string()]);
    }

    #[test]
    fn test_symbols() {
        let findings = check_symbols("Acme (c) 2024, Widget(TM) and Gizmo(r).").unwrap();
        let replacements: Vec<&str> = findings
            .iter()
            .map(|f| f.replacements[0].as_str())
            .collect();
        assert_eq!(replacements, vec!["©", "™", "®"]);
    }

    #[test]
    fn test_multiplication() {
        let findings = check_symbols("A 4x4 board and a 2 X 3 grid.").unwrap();
        assert_eq!(spans(&findings), vec![(2, 5), (18, 23)]);
        assert_eq!(findings[0].replacements, vec!["4 × 4".to_string()]);
        assert_eq!(findings[1].replacements, vec!["2 × 3".to_string()]);
    }

    #[test]
    fn test_findings_use_registered_id() {
        let findings = check_symbols("(c) 3x3").unwrap();
        assert!(findings.iter().all(|f| f.check_id == SYMBOLS));
    }
}
