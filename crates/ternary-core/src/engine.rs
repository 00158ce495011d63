//! The evaluation engine.
//!
//! Owns the rule registry, the decision log, and the evaluation counter
//! behind a single reader-writer lock. `evaluate` and `add_rule` hold the
//! write lock for their full duration; read-only queries share the read lock.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::decision::DecisionRecord;
use crate::log::{DecisionLog, LogRetention};
use crate::registry::RuleRegistry;
use crate::rule::Rule;
use crate::trit::Trit;

/// Snapshot of engine counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Every `evaluate` call, including lookups of unknown rules.
    pub total_evaluations: u64,
    /// Decisions appended to the log, including any since evicted.
    pub total_decisions: u64,
    pub registered_rules: usize,
    /// Decisions currently held in the log.
    pub retained_decisions: usize,
}

impl EngineStats {
    /// String-keyed view for callers that serialize stats generically.
    pub fn to_map(&self) -> BTreeMap<String, serde_json::Value> {
        BTreeMap::from([
            (
                "total_evaluations".to_string(),
                self.total_evaluations.into(),
            ),
            ("total_decisions".to_string(), self.total_decisions.into()),
            ("registered_rules".to_string(), self.registered_rules.into()),
            (
                "retained_decisions".to_string(),
                self.retained_decisions.into(),
            ),
        ])
    }
}

#[derive(Debug)]
struct EngineState {
    rules: RuleRegistry,
    decisions: DecisionLog,
    eval_count: u64,
}

/// Thread-safe ternary rule engine.
///
/// Share across threads with `Arc<Engine>`. No operation blocks on I/O or
/// fails: an unknown rule yields an UNKNOWN decision with zero confidence.
#[derive(Debug)]
pub struct Engine {
    state: RwLock<EngineState>,
}

impl Engine {
    /// Create an engine with the default rules and configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the default rules and the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        tracing::debug!(retention = %config.retention, "ternary engine created");
        Self {
            state: RwLock::new(EngineState {
                rules: RuleRegistry::with_defaults(),
                decisions: DecisionLog::new(config.retention),
                eval_count: 0,
            }),
        }
    }

    // Rules and the log only grow or get replaced wholesale, so state behind
    // a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evaluate the rule registered under `rule_name` on `inputs`.
    ///
    /// The evaluation counter is incremented on every call. A missing rule
    /// produces an UNKNOWN record with zero confidence that is not logged.
    /// Otherwise confidence is the value's scalar times the rule weight,
    /// capped at 1.0, and the record is appended to the log.
    pub fn evaluate(&self, rule_name: &str, inputs: &[Trit]) -> DecisionRecord {
        let mut state = self.write();
        state.eval_count += 1;

        let Some(rule) = state.rules.get(rule_name) else {
            tracing::warn!(rule = rule_name, "rule not found");
            return DecisionRecord::rule_not_found(rule_name);
        };

        let value = rule.evaluate(inputs);
        // Upper cap only. `f64::min` would turn a NaN product into 1.0.
        let product = value.confidence() * rule.weight;
        let confidence = if product > 1.0 { 1.0 } else { product };
        let record = DecisionRecord::resolved(rule_name, value, confidence, inputs.len());

        tracing::debug!(
            rule = rule_name,
            inputs = ?inputs,
            %value,
            confidence,
            id = %record.id(),
            "rule evaluated"
        );

        state.decisions.append(record.clone());
        record
    }

    /// Register `rule` under `name`, replacing any rule already there.
    pub fn add_rule(&self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        let weight = rule.weight;
        let kind = rule.kind.name();
        let mut state = self.write();
        if state.rules.insert(name.clone(), rule).is_some() {
            tracing::info!(rule = %name, kind, weight, "rule replaced");
        } else {
            tracing::debug!(rule = %name, kind, weight, "rule registered");
        }
    }

    /// Current counters.
    pub fn stats(&self) -> EngineStats {
        let state = self.read();
        EngineStats {
            total_evaluations: state.eval_count,
            total_decisions: state.decisions.total_appended(),
            registered_rules: state.rules.len(),
            retained_decisions: state.decisions.len(),
        }
    }

    /// Copy of every retained decision, oldest first.
    pub fn decisions(&self) -> Vec<DecisionRecord> {
        self.read().decisions.iter().cloned().collect()
    }

    /// Copy of the newest `n` retained decisions, oldest first.
    pub fn recent(&self, n: usize) -> Vec<DecisionRecord> {
        self.read().decisions.recent(n).cloned().collect()
    }

    /// Registered rule names, sorted.
    pub fn rule_names(&self) -> Vec<String> {
        self.read()
            .rules
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Copy of the rule registered under `name`.
    pub fn rule(&self, name: &str) -> Option<Rule> {
        self.read().rules.get(name).cloned()
    }

    /// The log's retention bound.
    pub fn retention(&self) -> LogRetention {
        self.read().decisions.retention()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
