//! Redundant phrases and RAS syndrome ("PIN number").

use proselint_core::matcher::{MatchOptions, existence_check};
use proselint_core::{CheckError, CheckMetadata, CheckRegistry, Finding};

use crate::support::sources;

pub const CATEGORY: &str = "redundancy";

pub const MISC: &str = "redundancy.misc";
pub const RAS_SYNDROME: &str = "redundancy.ras_syndrome";

const REDUNDANT_PHRASES: &[&str] = &[
    "absolutely essential",
    "absolutely necessary",
    "advance planning",
    "advance warning",
    "basic fundamentals",
    "close proximity",
    "completely finished",
    "consensus of opinion",
    "end result",
    "exact same",
    "false pretense",
    "final outcome",
    "free gift",
    "future plans",
    "gather together",
    "general consensus",
    "invited guest",
    "join together",
    "new innovation",
    "past history",
    "personal opinion",
    "plan ahead",
    "sudden impulse",
    "sum total",
    "true fact",
    "unexpected surprise",
    "usual custom",
];

const RAS_PHRASES: &[&str] = &[
    "ATM machine",
    "PIN number",
    "HIV virus",
    "LCD display",
    "LED light",
    "GPS system",
    "URL link",
    "HTML markup",
    "PDF format",
    "SAT test",
    "GPA average",
    "RPM rate",
    "MHz frequency",
    "RAM memory",
    "ROM memory",
    "USB port",
    "WiFi network",
    "CEO officer",
    "CTO officer",
    "CFO officer",
    "DVD disc",
    "CD disc",
    "FAQ questions",
    "RSVP reply",
    "ISBN number",
    "VIN number",
    "UPC code",
    "ZIP code",
    "SSN number",
    "ID identification",
];

pub fn check_redundancy(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        REDUNDANT_PHRASES,
        MISC,
        "Redundant phrase detected: \"{}\". Consider simplifying.",
        &MatchOptions::new()
            .ignore_case()
            .with_source(sources::PROSELINT),
    )
}

pub fn check_ras_syndrome(text: &str) -> Result<Vec<Finding>, CheckError> {
    existence_check(
        text,
        RAS_PHRASES,
        RAS_SYNDROME,
        "RAS syndrome detected: \"{}\". The acronym already contains the repeated word.",
        &MatchOptions::new()
            .ignore_case()
            .with_source(sources::PROSELINT),
    )
}

pub fn register(registry: &mut CheckRegistry) {
    registry.register_check(
        MISC,
        check_redundancy,
        CheckMetadata::new(
            "Redundant Phrases",
            "Identify redundant phrases that can be simplified.",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
    registry.register_check(
        RAS_SYNDROME,
        check_ras_syndrome,
        CheckMetadata::new(
            "RAS Syndrome",
            "Detect Redundant Acronym Syndrome (e.g., \"ATM machine\").",
            CATEGORY,
        )
        .with_source(sources::PROSELINT),
    );
}
