//! Append-only decision log with a retention bound.
//!
//! Entries are kept oldest to newest and never reordered. When the log is
//! bounded and full, appending evicts the oldest entry.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decision::DecisionRecord;
use crate::error::TernaryError;

/// Retained entries when no retention is configured.
pub const DEFAULT_RETENTION: usize = 100_000;

/// How many decisions the log keeps in memory.
///
/// Serialized as an entry count, where `0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub enum LogRetention {
    /// Keep every decision for the engine's lifetime.
    Unbounded,
    /// Keep at most this many of the newest decisions.
    Bounded(NonZeroUsize),
}

impl LogRetention {
    /// Maximum retained entries, or `None` when unbounded.
    pub fn capacity(self) -> Option<usize> {
        match self {
            LogRetention::Unbounded => None,
            LogRetention::Bounded(n) => Some(n.get()),
        }
    }
}

impl Default for LogRetention {
    fn default() -> Self {
        LogRetention::from(DEFAULT_RETENTION)
    }
}

impl From<usize> for LogRetention {
    fn from(n: usize) -> Self {
        NonZeroUsize::new(n).map_or(LogRetention::Unbounded, LogRetention::Bounded)
    }
}

impl From<LogRetention> for usize {
    fn from(r: LogRetention) -> usize {
        r.capacity().unwrap_or(0)
    }
}

impl fmt::Display for LogRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRetention::Unbounded => f.pad("unbounded"),
            LogRetention::Bounded(n) => f.pad(&n.to_string()),
        }
    }
}

impl FromStr for LogRetention {
    type Err = TernaryError;

    /// Accepts `unbounded` or an entry count (`0` also means unbounded).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(LogRetention::Unbounded);
        }
        s.parse::<usize>()
            .map(LogRetention::from)
            .map_err(|e| TernaryError::InvalidRetention(format!("'{s}': {e}")))
    }
}

/// Ordered log of decisions.
#[derive(Debug, Clone)]
pub struct DecisionLog {
    entries: VecDeque<DecisionRecord>,
    retention: LogRetention,
    total_appended: u64,
}

impl DecisionLog {
    /// Create an empty log with the given retention.
    pub fn new(retention: LogRetention) -> Self {
        Self {
            entries: VecDeque::new(),
            retention,
            total_appended: 0,
        }
    }

    /// Append a decision, evicting the oldest entry if the log is full.
    pub fn append(&mut self, record: DecisionRecord) {
        if let Some(cap) = self.retention.capacity() {
            while self.entries.len() >= cap {
                if let Some(evicted) = self.entries.pop_front() {
                    tracing::trace!(id = %evicted.id(), "decision evicted from log");
                }
            }
        }
        self.entries.push_back(record);
        self.total_appended += 1;
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decisions appended over the log's lifetime, including evicted ones.
    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Decisions dropped by the retention bound.
    pub fn evicted(&self) -> u64 {
        self.total_appended - self.entries.len() as u64
    }

    pub fn retention(&self) -> LogRetention {
        self.retention
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRecord> {
        self.entries.iter()
    }

    /// The newest `n` decisions, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &DecisionRecord> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new(LogRetention::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trit::Trit;

    fn record(n: usize) -> DecisionRecord {
        DecisionRecord::resolved("AND", Trit::True, 1.0, n)
    }

    fn bounded(n: usize) -> LogRetention {
        LogRetention::Bounded(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut log = DecisionLog::new(LogRetention::Unbounded);
        for i in 0..50 {
            log.append(record(i));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.total_appended(), 50);
        assert_eq!(log.evicted(), 0);
    }

    #[test]
    fn bounded_evicts_oldest_first() {
        let mut log = DecisionLog::new(bounded(3));
        for i in 0..5 {
            log.append(record(i));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.total_appended(), 5);
        assert_eq!(log.evicted(), 2);
        let reasons: Vec<_> = log.iter().map(|d| d.reason().to_string()).collect();
        assert_eq!(
            reasons,
            vec![
                "Rule[AND] evaluated 2 inputs",
                "Rule[AND] evaluated 3 inputs",
                "Rule[AND] evaluated 4 inputs",
            ]
        );
    }

    #[test]
    fn recent_returns_newest_in_order() {
        let mut log = DecisionLog::new(LogRetention::Unbounded);
        for i in 0..4 {
            log.append(record(i));
        }
        let recent: Vec<_> = log.recent(2).map(|d| d.reason().to_string()).collect();
        assert_eq!(
            recent,
            vec!["Rule[AND] evaluated 2 inputs", "Rule[AND] evaluated 3 inputs"]
        );
        assert_eq!(log.recent(10).count(), 4);
    }

    #[test]
    fn retention_conversions() {
        assert_eq!(LogRetention::from(0), LogRetention::Unbounded);
        assert_eq!(LogRetention::from(8), bounded(8));
        assert_eq!(usize::from(LogRetention::Unbounded), 0);
        assert_eq!(LogRetention::default().capacity(), Some(DEFAULT_RETENTION));
    }

    #[test]
    fn retention_parse() {
        assert_eq!(
            "unbounded".parse::<LogRetention>().unwrap(),
            LogRetention::Unbounded
        );
        assert_eq!("0".parse::<LogRetention>().unwrap(), LogRetention::Unbounded);
        assert_eq!("16".parse::<LogRetention>().unwrap(), bounded(16));
        assert!("lots".parse::<LogRetention>().is_err());
        assert!("-3".parse::<LogRetention>().is_err());
    }

    #[test]
    fn retention_display() {
        assert_eq!(LogRetention::Unbounded.to_string(), "unbounded");
        assert_eq!(bounded(5).to_string(), "5");
    }
}
