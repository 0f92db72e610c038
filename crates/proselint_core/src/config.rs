//! Lint configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use proselint_plugin::Severity;
use serde::{Deserialize, Serialize};

use crate::{CheckRegistry, LinterError};

const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// File names probed by [`LintConfig::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".proselint.json", "proselint.json"];

/// Default cap on findings per lint call.
pub const DEFAULT_MAX_ERRORS: usize = 100;

fn default_max_errors() -> usize {
    DEFAULT_MAX_ERRORS
}

/// Configuration consumed by the lint engine.
///
/// Serialized as `{ maxErrors, checks, severityOverrides }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Maximum number of findings returned. Zero yields no findings.
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,

    /// Check id to enabled flag. Only an explicit `false` disables a check.
    #[serde(default)]
    pub checks: BTreeMap<String, bool>,

    /// Check id to the severity its findings are reported with.
    #[serde(default)]
    pub severity_overrides: BTreeMap<String, Severity>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            checks: BTreeMap::new(),
            severity_overrides: BTreeMap::new(),
        }
    }
}

/// A partial [`LintConfig`]. Present fields replace the current value
/// wholesale; maps are not merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_overrides: Option<BTreeMap<String, Severity>>,
}

impl LintConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?;

        if let Err(e) = schema()?.validate(&value) {
            return Err(LinterError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Returns the first config file name from [`CONFIG_FILE_NAMES`] present
    /// in `dir`.
    pub fn find_in(dir: impl AsRef<Path>) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Loads the config file found in `dir`, if any.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, LinterError> {
        Self::find_in(dir).map(Self::from_file).transpose()
    }

    /// Seeds `checks` with each registered check's default enabled flag.
    /// Ids already present keep their explicit value.
    pub fn with_registry_defaults(mut self, registry: &CheckRegistry) -> Self {
        for (id, enabled) in registry.default_check_states() {
            self.checks.entry(id).or_insert(enabled);
        }
        self
    }

    /// Applies a partial update.
    pub fn apply(&mut self, update: LintConfigUpdate) {
        if let Some(max_errors) = update.max_errors {
            self.max_errors = max_errors;
        }
        if let Some(checks) = update.checks {
            self.checks = checks;
        }
        if let Some(overrides) = update.severity_overrides {
            self.severity_overrides = overrides;
        }
    }

    /// Returns false only when `id` is explicitly disabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.checks.get(id) != Some(&false)
    }

    pub fn severity_override(&self, id: &str) -> Option<Severity> {
        self.severity_overrides.get(id).copied()
    }
}

fn schema() -> Result<&'static Validator, LinterError> {
    CONFIG_SCHEMA
        .get_or_init(|| {
            let schema_json: serde_json::Value = serde_json::from_str(SCHEMA_JSON)
                .map_err(|e| format!("Invalid embedded config schema: {}", e))?;
            Validator::new(&schema_json)
                .map_err(|e| format!("Invalid config schema compilation: {}", e))
        })
        .as_ref()
        .map_err(|e| LinterError::config(e.clone()))
}
