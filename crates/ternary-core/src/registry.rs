//! Name-keyed rule registry.

use std::collections::HashMap;

use crate::rule::{Rule, RuleKind};

/// Case-sensitive mapping from rule name to [`Rule`].
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry seeded with AND, OR, NOT, CONSENSUS, and EVOLVE.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in RuleKind::builtins() {
            let rule = Rule::builtin(kind);
            registry.insert(rule.name.clone(), rule);
        }
        registry
    }

    /// Insert or replace a rule, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(name.into(), rule)
    }

    /// Look up a rule by exact name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, rule)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        let mut entries: Vec<_> = self.rules.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries.into_iter()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
