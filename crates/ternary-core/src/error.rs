//! Error types for the ternary engine.
//!
//! Evaluation itself never fails. These errors only arise when turning
//! external text or configuration into engine values.

/// Errors from parsing trits, rule kinds, and engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum TernaryError {
    #[error("invalid trit '{0}': expected true/false/unknown, t/f/u, 1/-1/0, or +/-/?")]
    InvalidTrit(String),

    #[error("invalid raw trit value {0}: expected -1, 0, or 1")]
    InvalidRawTrit(i8),

    #[error("unknown rule kind '{0}': expected AND, OR, NOT, CONSENSUS, or EVOLVE")]
    UnknownRuleKind(String),

    #[error("invalid log retention: {0}")]
    InvalidRetention(String),
}
