//! Three-valued logic engine.
//!
//! Every decision resolves to one of TRUE, FALSE, or UNKNOWN. UNKNOWN is a
//! meaningful state rather than an error: an unknown rule, for instance, is
//! reported as an UNKNOWN decision with zero confidence.
//!
//! The core abstraction is the [`Engine`], which owns a [`RuleRegistry`] of
//! named, weighted [`Rule`]s, a bounded [`DecisionLog`], and an evaluation
//! counter. Callers evaluate rules by name and receive an immutable
//! [`DecisionRecord`] for auditing.

pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod log;
pub mod registry;
pub mod rule;
pub mod trit;

pub use config::EngineConfig;
pub use decision::{DecisionId, DecisionRecord};
pub use engine::{Engine, EngineStats};
pub use error::TernaryError;
pub use log::{DecisionLog, LogRetention};
pub use registry::RuleRegistry;
pub use rule::{Evaluator, Rule, RuleKind};
pub use trit::Trit;
