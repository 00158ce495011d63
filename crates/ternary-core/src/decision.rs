//! Decision records: the immutable audit entry produced per evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trit::Trit;

/// Unique identifier for a decision.
pub type DecisionId = Uuid;

/// The outcome of evaluating a rule.
///
/// Fields are read-only once the record is built. `depth` is reserved for
/// nested evaluation chains and is always zero for direct evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    id: DecisionId,
    value: Trit,
    confidence: f64,
    reason: String,
    timestamp: DateTime<Utc>,
    depth: u32,
}

impl DecisionRecord {
    fn new(value: Trit, confidence: f64, reason: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            confidence,
            reason,
            timestamp: Utc::now(),
            depth: 0,
        }
    }

    /// Record for a rule that ran on `input_count` inputs.
    pub fn resolved(rule_name: &str, value: Trit, confidence: f64, input_count: usize) -> Self {
        Self::new(
            value,
            confidence,
            format!("Rule[{rule_name}] evaluated {input_count} inputs"),
        )
    }

    /// Record for a lookup of an unregistered rule name.
    pub fn rule_not_found(rule_name: &str) -> Self {
        Self::new(
            Trit::Unknown,
            0.0,
            format!("Rule '{rule_name}' not found"),
        )
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn value(&self) -> Trit {
        self.value
    }

    /// Confidence in `[0, 1]` for rules with non-negative weights.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the decision resolved to TRUE or FALSE.
    pub fn is_resolved(&self) -> bool {
        self.value.is_known()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_reason_names_rule_and_count() {
        let d = DecisionRecord::resolved("CONSENSUS", Trit::True, 1.0, 3);
        assert_eq!(d.reason(), "Rule[CONSENSUS] evaluated 3 inputs");
        assert_eq!(d.value(), Trit::True);
        assert_eq!(d.confidence(), 1.0);
        assert_eq!(d.depth(), 0);
        assert!(d.is_resolved());
    }

    #[test]
    fn not_found_record() {
        let d = DecisionRecord::rule_not_found("NOPE");
        assert_eq!(d.value(), Trit::Unknown);
        assert_eq!(d.confidence(), 0.0);
        assert!(d.reason().contains("NOPE"));
        assert!(!d.is_resolved());
    }

    #[test]
    fn ids_are_unique() {
        let a = DecisionRecord::rule_not_found("X");
        let b = DecisionRecord::rule_not_found("X");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serialized_field_names() {
        let d = DecisionRecord::resolved("AND", Trit::False, 0.0, 2);
        let json = serde_json::to_value(&d).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["confidence", "depth", "id", "reason", "timestamp", "value"]
        );
        assert_eq!(obj["value"], serde_json::json!(-1));
        assert_eq!(obj["id"], serde_json::json!(d.id().to_string()));
    }

    #[test]
    fn json_round_trip_preserves_record() {
        let d = DecisionRecord::resolved("EVOLVE", Trit::True, 1.0, 4);
        let json = serde_json::to_string(&d).unwrap();
        let back: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
