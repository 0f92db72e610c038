//! Check registry.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use proselint_plugin::{Check, CheckCategory, CheckMetadata};
use tracing::debug;

struct RegisteredCheck {
    check: Box<dyn Check>,
    metadata: CheckMetadata,
}

/// Catalog of checks keyed by id, grouped into categories.
///
/// Ids and categories are kept in insertion order. Re-registering an id
/// keeps its original position but appends another listing to its
/// category.
#[derive(Default)]
pub struct CheckRegistry {
    ids: Vec<String>,
    checks: HashMap<String, RegisteredCheck>,
    categories: Vec<CheckCategory>,
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("ids", &self.ids)
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `check` under `id`, replacing any previous check with that
    /// id. `metadata.id` is overwritten with `id`.
    pub fn register_check(
        &mut self,
        id: impl Into<String>,
        check: impl Check + 'static,
        mut metadata: CheckMetadata,
    ) {
        let id = id.into();
        metadata.id = id.clone();

        let idx = match self
            .categories
            .iter()
            .position(|c| c.id == metadata.category)
        {
            Some(idx) => idx,
            None => {
                self.categories
                    .push(CheckCategory::new(metadata.category.clone()));
                self.categories.len() - 1
            }
        };
        self.categories[idx].checks.push(metadata.clone());

        let previous = self.checks.insert(
            id.clone(),
            RegisteredCheck {
                check: Box::new(check),
                metadata,
            },
        );
        if previous.is_none() {
            self.ids.push(id);
        } else {
            debug!("Check '{}' re-registered", id);
        }
    }

    /// Removes a check. Returns true if it was registered.
    pub fn unregister_check(&mut self, id: &str) -> bool {
        let Some(removed) = self.checks.remove(id) else {
            return false;
        };
        self.ids.retain(|existing| existing != id);
        if let Some(category) = self
            .categories
            .iter_mut()
            .find(|c| c.id == removed.metadata.category)
        {
            category.checks.retain(|meta| meta.id != id);
        }
        true
    }

    pub fn get_check(&self, id: &str) -> Option<&dyn Check> {
        self.checks.get(id).map(|entry| entry.check.as_ref())
    }

    pub fn get_check_metadata(&self, id: &str) -> Option<&CheckMetadata> {
        self.checks.get(id).map(|entry| &entry.metadata)
    }

    /// All ids in registration order.
    pub fn get_all_check_ids(&self) -> Vec<&str> {
        self.ids.iter().map(String::as_str).collect()
    }

    /// Listings of one category; empty for an unknown category.
    pub fn get_checks_by_category(&self, category: &str) -> &[CheckMetadata] {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .map(|c| c.checks.as_slice())
            .unwrap_or(&[])
    }

    /// All categories in order of first appearance.
    pub fn get_all_categories(&self) -> &[CheckCategory] {
        &self.categories
    }

    /// Ids, in registration order, that `checks` does not explicitly set to
    /// `false`.
    pub fn get_enabled_checks(&self, checks: &BTreeMap<String, bool>) -> Vec<&str> {
        self.ids
            .iter()
            .filter(|id| checks.get(id.as_str()) != Some(&false))
            .map(String::as_str)
            .collect()
    }

    pub fn has_check(&self, id: &str) -> bool {
        self.checks.contains_key(id)
    }

    pub fn get_check_count(&self) -> usize {
        self.checks.len()
    }

    /// Removes every check and category.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.checks.clear();
        self.categories.clear();
    }

    /// Each check's registration-time enabled flag, keyed by id.
    pub fn default_check_states(&self) -> BTreeMap<String, bool> {
        self.checks
            .iter()
            .map(|(id, entry)| (id.clone(), entry.metadata.enabled))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proselint_ast::Span;
    use proselint_plugin::{Finding, Severity};

    fn empty(_: &str) -> Vec<Finding> {
        Vec::new()
    }

    fn always(_: &str) -> Vec<Finding> {
        vec![Finding::new("test.always", "always", Span::new(0, 1))]
    }

    fn meta(category: &str) -> CheckMetadata {
        CheckMetadata::new("Test", "A test check", category)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CheckRegistry::new();
        registry.register_check("weasel_words.very", always, meta("weasel_words"));

        assert!(registry.has_check("weasel_words.very"));
        assert_eq!(registry.get_check_count(), 1);

        let metadata = registry.get_check_metadata("weasel_words.very").unwrap();
        assert_eq!(metadata.id, "weasel_words.very");
        assert_eq!(metadata.category, "weasel_words");

        let findings = registry
            .get_check("weasel_words.very")
            .unwrap()
            .check("x")
            .unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_missing_lookups() {
        let registry = CheckRegistry::new();
        assert!(registry.get_check("nope").is_none());
        assert!(registry.get_check_metadata("nope").is_none());
        assert!(registry.get_checks_by_category("nope").is_empty());
        assert!(!registry.has_check("nope"));
    }

    #[test]
    fn test_category_created_on_first_sight() {
        let mut registry = CheckRegistry::new();
        registry.register_check("social_awareness.lgbtq", empty, meta("social_awareness"));
        registry.register_check("social_awareness.nword", empty, meta("social_awareness"));
        registry.register_check("hedging.misc", empty, meta("hedging"));

        let categories = registry.get_all_categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "social_awareness");
        assert_eq!(categories[0].name, "Social Awareness");
        assert_eq!(categories[0].checks.len(), 2);
        assert_eq!(categories[1].name, "Hedging");
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = CheckRegistry::new();
        for id in ["c.one", "a.two", "b.three"] {
            registry.register_check(id, empty, meta("x"));
        }
        assert_eq!(
            registry.get_all_check_ids(),
            vec!["c.one", "a.two", "b.three"]
        );
    }

    #[test]
    fn test_reregister_replaces_and_duplicates_listing() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.register_check("x.b", empty, meta("x"));
        registry.register_check(
            "x.a",
            always,
            meta("x").with_severity(Severity::Error),
        );

        assert_eq!(registry.get_check_count(), 2);
        assert_eq!(registry.get_all_check_ids(), vec!["x.a", "x.b"]);
        assert_eq!(
            registry.get_check_metadata("x.a").unwrap().severity,
            Severity::Error
        );
        assert_eq!(registry.get_check("x.a").unwrap().check("").unwrap().len(), 1);

        let listed: Vec<&str> = registry
            .get_checks_by_category("x")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(listed, vec!["x.a", "x.b", "x.a"]);
    }

    #[test]
    fn test_unregister() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.register_check("x.a", empty, meta("x"));
        registry.register_check("x.b", empty, meta("x"));

        assert!(registry.unregister_check("x.a"));
        assert!(!registry.has_check("x.a"));
        assert_eq!(registry.get_all_check_ids(), vec!["x.b"]);
        assert_eq!(registry.get_checks_by_category("x").len(), 1);
        assert!(!registry.unregister_check("x.a"));
    }

    #[test]
    fn test_unregistered_never_enabled() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.unregister_check("x.a");

        let config = BTreeMap::from([("x.a".to_string(), true)]);
        assert!(registry.get_enabled_checks(&config).is_empty());
    }

    #[test]
    fn test_enabled_checks_default_on() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.register_check("x.b", empty, meta("x").with_enabled(false));
        registry.register_check("x.c", empty, meta("x"));

        let config = BTreeMap::from([
            ("x.a".to_string(), false),
            ("x.c".to_string(), true),
            ("unknown".to_string(), false),
        ]);

        // Metadata `enabled` is a seed for hosts, not consulted here.
        assert_eq!(registry.get_enabled_checks(&config), vec!["x.b", "x.c"]);
        assert_eq!(
            registry.get_enabled_checks(&BTreeMap::new()),
            vec!["x.a", "x.b", "x.c"]
        );
    }

    #[test]
    fn test_clear() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.clear();

        assert_eq!(registry.get_check_count(), 0);
        assert!(registry.get_all_check_ids().is_empty());
        assert!(registry.get_all_categories().is_empty());
    }

    #[test]
    fn test_default_check_states() {
        let mut registry = CheckRegistry::new();
        registry.register_check("x.a", empty, meta("x"));
        registry.register_check("x.b", empty, meta("x").with_enabled(false));

        let states = registry.default_check_states();
        assert_eq!(
            states,
            BTreeMap::from([("x.a".to_string(), true), ("x.b".to_string(), false)])
        );
    }
}
