//! Pattern-matching primitives that rules are built from.
//!
//! Every primitive skips matches that start inside a quotation (see
//! [`proselint_text::is_quoted`]) and reports spans in UTF-16 code units.

use proselint_ast::Span;
use proselint_plugin::{CheckError, Finding, Severity};
use proselint_text::{OffsetMap, QuoteIndex};
use regex::{Regex, RegexBuilder};

/// Options for [`existence_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Match regardless of case. Default: false.
    pub ignore_case: bool,
    /// Treat patterns as literal phrases bounded by `\b`. When false,
    /// patterns are raw regular expressions. Default: true.
    pub require_padding: bool,
    /// Default: warning.
    pub severity: Severity,
    pub replacements: Vec<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            require_padding: true,
            severity: Severity::Warning,
            replacements: Vec::new(),
            source: None,
            source_url: None,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Use patterns as raw regular expressions.
    pub fn raw(mut self) -> Self {
        self.require_padding = false;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_replacements<I, S>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements = replacements.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// Options for [`preferred_forms_check`] and [`consistency_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// Default: false.
    pub ignore_case: bool,
    /// Default: suggestion.
    pub severity: Severity,
    pub source: Option<String>,
    pub source_url: Option<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            severity: Severity::Suggestion,
            source: None,
            source_url: None,
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// Per-call view of a text: byte to UTF-16 offsets and quoted regions.
///
/// Rules with bespoke matching logic use this to produce findings with the
/// same offset and quote-exemption rules as the primitives.
#[derive(Debug)]
pub struct MatchContext<'t> {
    text: &'t str,
    offsets: OffsetMap,
    quotes: QuoteIndex,
}

impl<'t> MatchContext<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            offsets: OffsetMap::new(text),
            quotes: QuoteIndex::new(text),
        }
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Whether the byte offset lies inside a quotation.
    pub fn is_quoted(&self, byte: usize) -> bool {
        self.quotes.is_quoted(byte)
    }

    /// Converts a byte range to a UTF-16 span.
    pub fn span(&self, start: usize, end: usize) -> Span {
        self.offsets.span(start, end)
    }

    /// Creates a finding over a byte range.
    pub fn finding(
        &self,
        check_id: &str,
        message: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Finding {
        Finding::new(check_id, message, self.span(start, end))
    }
}

/// Substitutes the first `{}` in `template` with `value`.
pub fn fill_template(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

/// Compiles `pattern` with the case rule used by all primitives.
pub fn build_regex(pattern: &str, ignore_case: bool) -> Result<Regex, CheckError> {
    Ok(RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()?)
}

fn form_regex(variant: &str, ignore_case: bool) -> Result<Regex, CheckError> {
    build_regex(&format!(r"(?:^|\W)({variant})(?:\W|$)"), ignore_case)
}

/// Byte ranges of the captured variant for every match of a form regex.
fn form_matches(regex: &Regex, text: &str) -> Vec<(usize, usize)> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter(|m| !m.is_empty())
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Flags every occurrence of each pattern.
///
/// Patterns are processed in order and each is scanned left to right for
/// non-overlapping matches. `message` has its first `{}` replaced by the
/// matched text.
pub fn existence_check(
    text: &str,
    patterns: &[&str],
    check_id: &str,
    message: &str,
    options: &MatchOptions,
) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    for pattern in patterns {
        let regex = if options.require_padding {
            build_regex(&format!(r"\b{}\b", regex::escape(pattern)), options.ignore_case)?
        } else {
            build_regex(pattern, options.ignore_case)?
        };

        for m in regex.find_iter(text) {
            if m.is_empty() || ctx.is_quoted(m.start()) {
                continue;
            }
            findings.push(
                ctx.finding(check_id, fill_template(message, m.as_str()), m.start(), m.end())
                    .with_severity(options.severity)
                    .with_replacements(options.replacements.iter().cloned())
                    .with_source(options.source.clone(), options.source_url.clone()),
            );
        }
    }

    Ok(findings)
}

/// Flags variants of a preferred form.
///
/// `pairs` maps each preferred form to regex variants. A variant matches when
/// delimited by non-word characters or the text edges; only the variant
/// itself is reported. `message` receives the preferred form, then the
/// matched text.
pub fn preferred_forms_check(
    text: &str,
    pairs: &[(&str, &[&str])],
    check_id: &str,
    message: &str,
    options: &FormOptions,
) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    for (preferred, variants) in pairs {
        for variant in *variants {
            let regex = form_regex(variant, options.ignore_case)?;
            for (start, end) in form_matches(&regex, text) {
                if ctx.is_quoted(start) {
                    continue;
                }
                let message = fill_template(&fill_template(message, preferred), &text[start..end]);
                findings.push(
                    ctx.finding(check_id, message, start, end)
                        .with_severity(options.severity)
                        .with_replacements([*preferred])
                        .with_source(options.source.clone(), options.source_url.clone()),
                );
            }
        }
    }

    Ok(findings)
}

/// Flags the less frequent member of each word pair when both occur.
///
/// On equal counts the second member is the majority. Counting includes
/// quoted occurrences; only reporting skips them. `message` receives the
/// majority word, then the matched text.
pub fn consistency_check(
    text: &str,
    pairs: &[(&str, &str)],
    check_id: &str,
    message: &str,
    options: &FormOptions,
) -> Result<Vec<Finding>, CheckError> {
    let ctx = MatchContext::new(text);
    let mut findings = Vec::new();

    for (first, second) in pairs {
        let first_matches = form_matches(&form_regex(first, options.ignore_case)?, text);
        let second_matches = form_matches(&form_regex(second, options.ignore_case)?, text);

        if first_matches.is_empty() || second_matches.is_empty() {
            continue;
        }

        let (majority, minority) = if first_matches.len() > second_matches.len() {
            (*first, second_matches)
        } else {
            (*second, first_matches)
        };

        for (start, end) in minority {
            if ctx.is_quoted(start) {
                continue;
            }
            let message = fill_template(&fill_template(message, majority), &text[start..end]);
            findings.push(
                ctx.finding(check_id, message, start, end)
                    .with_severity(options.severity)
                    .with_replacements([majority])
                    .with_source(options.source.clone(), options.source_url.clone()),
            );
        }
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn spans(findings: &[Finding]) -> Vec<(u32, u32)> {
        findings.iter().map(|f| (f.span.start, f.span.end)).collect()
    }

    #[test]
    fn test_existence_finds_every_occurrence() {
        let findings = existence_check(
            "This is very very good.",
            &["very"],
            "weasel_words.very",
            "Substitute 'damn' every time you're inclined to write '{}'.",
            &MatchOptions::default(),
        )
        .unwrap();

        assert_eq!(spans(&findings), vec![(8, 12), (13, 17)]);
        assert_eq!(findings[0].extent, 4);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(
            findings[0].message,
            "Substitute 'damn' every time you're inclined to write 'very'."
        );
    }

    #[test]
    fn test_existence_respects_word_boundaries() {
        let findings = existence_check(
            "Everyvery avery very.",
            &["very"],
            "t",
            "{}",
            &MatchOptions::default(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(16, 20)]);
    }

    #[test]
    fn test_existence_case_sensitivity() {
        let text = "Very good and very bad.";
        let sensitive =
            existence_check(text, &["very"], "t", "{}", &MatchOptions::default()).unwrap();
        let insensitive =
            existence_check(text, &["very"], "t", "{}", &MatchOptions::new().ignore_case())
                .unwrap();

        assert_eq!(sensitive.len(), 1);
        assert_eq!(insensitive.len(), 2);
        assert_eq!(insensitive[0].message, "Very");
    }

    #[test]
    fn test_existence_escapes_literal_patterns() {
        let findings = existence_check(
            "Use e.g. here, not egg.",
            &["e.g"],
            "t",
            "{}",
            &MatchOptions::default(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(4, 7)]);
    }

    #[test]
    fn test_existence_raw_patterns() {
        let findings = existence_check(
            "Wait... what---really?",
            &[r"\.\.\.", "---"],
            "t",
            "{}",
            &MatchOptions::new().raw(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(4, 7), (12, 15)]);
    }

    #[test]
    fn test_existence_skips_quoted_matches() {
        let findings = existence_check(
            r#"He said "very good" but it was very bad."#,
            &["very"],
            "weasel_words.very",
            "{}",
            &MatchOptions::default(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(31, 35)]);
    }

    #[test]
    fn test_existence_patterns_in_caller_order() {
        let findings = existence_check(
            "ATM machine and PIN number",
            &["PIN number", "ATM machine"],
            "redundancy.ras_syndrome",
            "RAS syndrome. Use '{}' instead.",
            &MatchOptions::new().ignore_case(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(16, 26), (0, 11)]);
    }

    #[test]
    fn test_existence_options_flow_into_findings() {
        let options = MatchOptions::new()
            .with_severity(Severity::Error)
            .with_replacements(["planning"])
            .with_source("Garner's Modern American Usage")
            .with_source_url("https://example.org/garner");

        let findings = existence_check(
            "We need advance planning for this.",
            &["advance planning"],
            "redundancy.misc",
            "Redundancy. Use '{}' sparingly.",
            &options,
        )
        .unwrap();

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!((finding.span.start, finding.span.end), (8, 24));
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.replacements, vec!["planning".to_string()]);
        assert_eq!(finding.source.as_deref(), Some("Garner's Modern American Usage"));
        assert_eq!(finding.source_url.as_deref(), Some("https://example.org/garner"));
    }

    #[test]
    fn test_template_substitutes_first_placeholder_only() {
        let findings =
            existence_check("very", &["very"], "t", "{} and {}", &MatchOptions::default())
                .unwrap();
        assert_eq!(findings[0].message, "very and {}");
    }

    #[test]
    fn test_existence_utf16_offsets() {
        let findings =
            existence_check("Café 🎉 very", &["very"], "t", "{}", &MatchOptions::default())
                .unwrap();
        // "Café " is 5 units, "🎉 " is 3 units.
        assert_eq!(spans(&findings), vec![(8, 12)]);
    }

    #[test]
    fn test_invalid_raw_pattern_is_error() {
        let result = existence_check("text", &["(unclosed"], "t", "{}", &MatchOptions::new().raw());
        assert!(matches!(result, Err(CheckError::Pattern(_))));
    }

    #[test]
    fn test_empty_text() {
        let findings = existence_check("", &["very"], "t", "{}", &MatchOptions::default()).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_preferred_forms_reports_variant_only() {
        let findings = preferred_forms_check(
            "We need alot of time.",
            &[("a lot", &["alot"])],
            "misc.preferred_forms",
            "Use '{}' instead of '{}'.",
            &FormOptions::new().ignore_case(),
        )
        .unwrap();

        assert_eq!(spans(&findings), vec![(8, 12)]);
        assert_eq!(findings[0].message, "Use 'a lot' instead of 'alot'.");
        assert_eq!(findings[0].replacements, vec!["a lot".to_string()]);
        assert_eq!(findings[0].severity, Severity::Suggestion);
    }

    #[rstest]
    #[case::start_of_text("alot here", vec![(0, 4)])]
    #[case::end_of_text("here alot", vec![(5, 9)])]
    #[case::punctuation("(alot).", vec![(1, 5)])]
    #[case::inside_word("zalot alots", vec![])]
    fn test_preferred_forms_boundaries(#[case] text: &str, #[case] expected: Vec<(u32, u32)>) {
        let findings = preferred_forms_check(
            text,
            &[("a lot", &["alot"])],
            "t",
            "{} {}",
            &FormOptions::default(),
        )
        .unwrap();
        assert_eq!(spans(&findings), expected);
    }

    #[test]
    fn test_preferred_forms_skips_quoted() {
        let findings = preferred_forms_check(
            r#"She wrote "alot" but I say alot."#,
            &[("a lot", &["alot"])],
            "t",
            "{} {}",
            &FormOptions::default(),
        )
        .unwrap();
        assert_eq!(spans(&findings), vec![(27, 31)]);
    }

    #[test]
    fn test_consistency_flags_minority() {
        let findings = consistency_check(
            "The colour red. The color blue. The color green.",
            &[("colour", "color")],
            "spelling.consistency",
            "Inconsistent spelling of '{}' (vs. '{}').",
            &FormOptions::default(),
        )
        .unwrap();

        assert_eq!(spans(&findings), vec![(4, 10)]);
        assert_eq!(
            findings[0].message,
            "Inconsistent spelling of 'color' (vs. 'colour')."
        );
        assert_eq!(findings[0].replacements, vec!["color".to_string()]);
    }

    #[test]
    fn test_consistency_tie_flags_first_member() {
        let findings = consistency_check(
            "The colour red. The color blue.",
            &[("colour", "color")],
            "t",
            "{} {}",
            &FormOptions::default(),
        )
        .unwrap();

        assert_eq!(spans(&findings), vec![(4, 10)]);
        assert_eq!(findings[0].replacements, vec!["color".to_string()]);
        assert_eq!(findings[0].message, "color colour");
    }

    #[test]
    fn test_consistency_requires_both_words() {
        let findings = consistency_check(
            "The color red. The color blue.",
            &[("colour", "color")],
            "t",
            "{} {}",
            &FormOptions::default(),
        )
        .unwrap();
        assert!(findings.is_empty());
    }
}
