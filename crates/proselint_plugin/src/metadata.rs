//! Descriptive metadata for registered checks.

use serde::{Deserialize, Serialize};

use crate::Severity;

/// Describes a check: display name, category and defaults.
///
/// `id` is assigned by the registry on registration; any value set before
/// that is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMetadata {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Category key, e.g. `weasel_words`.
    pub category: String,
    /// Registration-time default. The engine does not read it; hosts seed
    /// their config from it.
    pub enabled: bool,
    /// Severity the check emits unless overridden.
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl CheckMetadata {
    /// Creates enabled metadata with warning severity.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            enabled: true,
            severity: Severity::Warning,
            source: None,
            source_url: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
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

/// A group of checks sharing a category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCategory {
    pub id: String,
    /// Display name derived from the key.
    pub name: String,
    pub description: String,
    /// Registration order. Re-registering an id appends it again.
    pub checks: Vec<CheckMetadata>,
}

impl CheckCategory {
    /// Creates an empty category for `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: display_name(&id),
            description: format!("Checks related to {id}"),
            id,
            checks: Vec::new(),
        }
    }
}

/// Turns a category key into a display name: `weasel_words` becomes
/// `Weasel Words`.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
