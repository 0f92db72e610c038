//! Passive voice.
//!
//! A "to be" (or, for the advanced check, "get") auxiliary followed by a
//! past-participle-shaped word: any `-ed` word or one of a fixed list of
//! irregular participles. Matches whose participle is really a predicate
//! adjective or a locative ("is tired", "is here") are dropped. This is a
//! lexical heuristic and will misfire both ways.

use proselint_core::matcher::MatchContext;
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding, Severity};
use regex::Regex;

use crate::support::{CachedRegex, cached_regex, sources};

pub const CATEGORY: &str = "passive_voice";

pub const CONSTRUCTION: &str = "passive_voice.construction";
pub const ADVANCED: &str = "passive_voice.advanced";

/// Irregular participles shared by both checks, after their differing heads.
macro_rules! irregular_tail {
    () => {
        "become|begun|bent|beset|bet|bid|bidden|bound|bitten|bled|blown|broken|bred|brought|\
         broadcast|built|burnt|burst|bought|cast|caught|chosen|clung|come|cost|crept|cut|dealt|\
         dug|dived|done|drawn|dreamt|driven|drunk|eaten|fallen|fed|felt|fought|found|fit|fled|\
         flung|flown|forbidden|forgotten|foregone|forgiven|forsaken|frozen|gotten|given|gone|\
         ground|grown|hung|heard|hidden|hit|held|hurt|kept|knelt|knit|known|laid|led|leapt|\
         learnt|left|lent|let|lain|lighted|lost|made|meant|met|misspelt|mistaken|mown|overcome|\
         overdone|overtaken|overthrown|paid|pled|proven|put|quit|read|rid|ridden|rung|risen|run|\
         sawn|said|seen|sought|sold|sent|set|sewn|shaken|shaven|shorn|shed|shone|shod|shot|\
         shown|shrunk|shut|sung|sunk|sat|slept|slain|slid|slung|slit|smitten|sown|spoken|sped|\
         spent|spilt|spun|spit|split|spread|sprung|stood|stolen|stuck|stung|stunk|stridden|\
         struck|strung|striven|sworn|swept|swollen|swum|swung|taken|taught|torn|told|thought|\
         thrived|thrown|thrust|trodden|understood|upheld|upset|woken|worn|woven|wed|wept|wound|\
         won|withheld|withstood|wrung|written"
    };
}

const CONSTRUCTION_PATTERN: &str = concat!(
    r"\b(am|are|were|being|is|been|was|be)\s+(\w+ed|awoken|been|born|beat|",
    irregular_tail!(),
    r")\b"
);

const BE_PATTERN: &str = concat!(
    r"\b(am|is|are|was|were|being|been|be)\s+(\w+ed|awoken|beaten|",
    irregular_tail!(),
    r")\b"
);

const GET_PATTERN: &str = r"\b(get|gets|got|getting)\s+(\w+ed|beaten|broken|caught|chosen|done|driven|eaten|forgotten|given|hidden|hit|known|made|paid|seen|sold|spoken|stolen|taken|told|written)\b";

static CONSTRUCTION_REGEX: CachedRegex = CachedRegex::new();
static BE_REGEX: CachedRegex = CachedRegex::new();
static GET_REGEX: CachedRegex = CachedRegex::new();

const NARROW_AUXILIARIES: &[&str] = &["is", "are", "was", "were"];

const NARROW_FALSE_POSITIVES: &[&str] = &[
    "good", "bad", "nice", "fine", "okay", "great", "terrible", "awful", "amazing", "wonderful",
    "horrible", "here", "there", "home", "away", "present", "absent", "available", "ready",
    "concerned", "interested", "excited", "surprised", "pleased", "worried", "tired", "confused",
];

const BE_ADJECTIVES: &[&str] = &[
    "happy", "sad", "angry", "excited", "tired", "ready", "available", "present", "absent", "good",
    "bad", "nice", "fine", "great", "small", "large", "big", "little", "old", "new", "young",
    "high", "low", "long", "short", "fast", "slow", "hot", "cold", "warm", "cool", "wet", "dry",
    "clean", "dirty", "easy", "hard", "difficult", "simple", "complex", "important",
    "interesting", "boring", "funny", "serious", "careful", "careless", "helpful", "useful",
    "useless",
];

const BE_LOCATIVES: &[&str] = &[
    "here", "there", "home", "away", "up", "down", "in", "out", "on", "off", "under", "over",
    "inside", "outside", "upstairs", "downstairs",
];

const GET_FALSE_POSITIVES: &[&str] = &[
    "up", "down", "in", "out", "on", "off", "home", "here", "there", "ready", "dressed",
    "undressed",
];

fn is_one_of(word: &str, list: &[&str]) -> bool {
    list.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// Byte ranges of unquoted matches that survive `is_false_positive`, which
/// receives the auxiliary and the participle.
fn passive_matches(
    ctx: &MatchContext<'_>,
    regex: &Regex,
    is_false_positive: impl Fn(&str, &str) -> bool,
) -> Vec<(usize, usize)> {
    regex
        .captures_iter(ctx.text())
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let auxiliary = caps.get(1)?.as_str();
            let participle = caps.get(2)?.as_str();
            if ctx.is_quoted(whole.start()) || is_false_positive(auxiliary, participle) {
                return None;
            }
            Some((whole.start(), whole.end()))
        })
        .collect()
}

pub fn check_passive_voice(text: &str) -> Result<Vec<Finding>, CheckError> {
    let regex = cached_regex(&CONSTRUCTION_REGEX, CONSTRUCTION_PATTERN, true)?;
    let ctx = MatchContext::new(text);

    let findings = passive_matches(&ctx, regex, |auxiliary, participle| {
        is_one_of(auxiliary, NARROW_AUXILIARIES) && is_one_of(participle, NARROW_FALSE_POSITIVES)
    })
    .into_iter()
    .map(|(start, end)| {
        let phrase = &text[start..end];
        ctx.finding(
            CONSTRUCTION,
            format!(
                "Passive voice detected: \"{phrase}\". Consider using active voice for stronger writing."
            ),
            start,
            end,
        )
        .with_severity(Severity::Suggestion)
        .with_replacements([format!(
            "Consider rewriting to use active voice instead of \"{phrase}\""
        )])
        .with_source(Some(sources::PROSELINT.to_string()), None)
    })
    .collect();

    Ok(findings)
}

/// Broader variant that also catches get-passives ("got fired").
pub fn check_passive_voice_advanced(text: &str) -> Result<Vec<Finding>, CheckError> {
    let be = cached_regex(&BE_REGEX, BE_PATTERN, true)?;
    let get = cached_regex(&GET_REGEX, GET_PATTERN, true)?;
    let ctx = MatchContext::new(text);

    let be_matches = passive_matches(&ctx, be, |_, participle| {
        is_one_of(participle, BE_ADJECTIVES) || is_one_of(participle, BE_LOCATIVES)
    });
    let get_matches = passive_matches(&ctx, get, |_, participle| {
        is_one_of(participle, GET_FALSE_POSITIVES)
    });

    let labelled = be_matches
        .into_iter()
        .map(|range| ("Passive voice detected", range))
        .chain(
            get_matches
                .into_iter()
                .map(|range| ("Passive voice with \"get\" detected", range)),
        );

    let findings = labelled
        .map(|(label, (start, end))| {
            ctx.finding(
                ADVANCED,
                format!(
                    "{label}: \"{}\". Consider rewriting in active voice.",
                    &text[start..end]
                ),
                start,
                end,
            )
            .with_severity(Severity::Suggestion)
            .with_replacements([
                "Rewrite in active voice by making the actor the subject",
                "Consider who or what is performing the action",
            ])
            .with_source(Some(sources::PROSELINT.to_string()), None)
        })
        .collect();

    Ok(findings)
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        CONSTRUCTION,
        check_passive_voice,
        CheckMetadata::new(
            "Passive Voice",
            "Detect passive voice constructions that may weaken writing.",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        ADVANCED,
        check_passive_voice_advanced,
        CheckMetadata::new(
            "Advanced Passive Voice",
            "Passive voice detection with context filtering, including \"get\" passives.",
            CATEGORY,
        )
        .with_severity(Severity::Suggestion)
        .with_enabled(false)
        .with_source(sources::PROSELINT),
    );
}
