//! Named, weighted evaluation rules.
//!
//! The five built-in algorithms are closed variants of [`RuleKind`]. Any other
//! logic plugs in through [`RuleKind::Custom`], which wraps an [`Evaluator`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::TernaryError;
use crate::trit::Trit;

/// Fraction of UNKNOWN inputs above which EVOLVE resolves to TRUE.
pub const EVOLVE_UNKNOWN_THRESHOLD: f64 = 0.3;

/// A pure function from a sequence of trits to a trit.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, inputs: &[Trit]) -> Trit;
}

impl<F> Evaluator for F
where
    F: Fn(&[Trit]) -> Trit + Send + Sync,
{
    fn evaluate(&self, inputs: &[Trit]) -> Trit {
        self(inputs)
    }
}

/// The algorithm a rule runs.
#[derive(Clone)]
pub enum RuleKind {
    /// Kleene strong AND: fold `min` from TRUE.
    And,
    /// Kleene strong OR: fold `max` from FALSE.
    Or,
    /// Łukasiewicz negation of the first input.
    Not,
    /// Strict-majority vote.
    Consensus,
    /// CONSENSUS with a bias toward TRUE under heavy uncertainty.
    Evolve,
    /// Externally supplied logic.
    Custom(Arc<dyn Evaluator>),
}

impl RuleKind {
    /// The built-in kinds, in registration order.
    pub fn builtins() -> [RuleKind; 5] {
        [
            RuleKind::And,
            RuleKind::Or,
            RuleKind::Not,
            RuleKind::Consensus,
            RuleKind::Evolve,
        ]
    }

    /// Canonical registry name of a built-in, or `"CUSTOM"`.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::And => "AND",
            RuleKind::Or => "OR",
            RuleKind::Not => "NOT",
            RuleKind::Consensus => "CONSENSUS",
            RuleKind::Evolve => "EVOLVE",
            RuleKind::Custom(_) => "CUSTOM",
        }
    }

    /// Weight the built-in is registered with by default.
    pub fn default_weight(&self) -> f64 {
        match self {
            RuleKind::And | RuleKind::Or | RuleKind::Not | RuleKind::Custom(_) => 1.0,
            RuleKind::Consensus => 1.5,
            RuleKind::Evolve => 2.0,
        }
    }

    /// Run the algorithm.
    pub fn evaluate(&self, inputs: &[Trit]) -> Trit {
        match self {
            RuleKind::And => and(inputs),
            RuleKind::Or => or(inputs),
            RuleKind::Not => not(inputs),
            RuleKind::Consensus => consensus(inputs),
            RuleKind::Evolve => evolve(inputs),
            RuleKind::Custom(evaluator) => evaluator.evaluate(inputs),
        }
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Custom(_) => f.write_str("Custom(..)"),
            builtin => f.write_str(builtin.name()),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = TernaryError;

    /// Parse a built-in kind by name. Custom kinds have no textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(RuleKind::And),
            "OR" => Ok(RuleKind::Or),
            "NOT" => Ok(RuleKind::Not),
            "CONSENSUS" => Ok(RuleKind::Consensus),
            "EVOLVE" => Ok(RuleKind::Evolve),
            _ => Err(TernaryError::UnknownRuleKind(s.to_string())),
        }
    }
}

fn and(inputs: &[Trit]) -> Trit {
    inputs.iter().fold(Trit::True, |acc, &t| acc.min(t))
}

fn or(inputs: &[Trit]) -> Trit {
    inputs.iter().fold(Trit::False, |acc, &t| acc.max(t))
}

fn not(inputs: &[Trit]) -> Trit {
    inputs.first().map_or(Trit::Unknown, |t| t.negate())
}

fn consensus(inputs: &[Trit]) -> Trit {
    if inputs.is_empty() {
        return Trit::Unknown;
    }
    let count = |v: Trit| inputs.iter().filter(|&&t| t == v).count();
    let half = inputs.len() / 2;
    if count(Trit::True) > half {
        Trit::True
    } else if count(Trit::False) > half {
        Trit::False
    } else {
        Trit::Unknown
    }
}

fn evolve(inputs: &[Trit]) -> Trit {
    // The unknown fraction is undefined with no inputs; match CONSENSUS.
    if inputs.is_empty() {
        return Trit::Unknown;
    }
    let unknowns = inputs.iter().filter(|&&t| t == Trit::Unknown).count();
    if unknowns as f64 / inputs.len() as f64 > EVOLVE_UNKNOWN_THRESHOLD {
        return Trit::True;
    }
    consensus(inputs)
}

/// A named evaluation rule with a confidence weight.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name the rule reports in decision reasons.
    pub name: String,
    /// Multiplier applied to the result's confidence.
    pub weight: f64,
    /// The algorithm.
    pub kind: RuleKind,
}

impl Rule {
    /// Create a rule from its parts.
    pub fn new(name: impl Into<String>, weight: f64, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            weight,
            kind,
        }
    }

    /// A built-in rule under its canonical name and default weight.
    pub fn builtin(kind: RuleKind) -> Self {
        Self::new(kind.name(), kind.default_weight(), kind)
    }

    /// A rule backed by caller-supplied logic.
    pub fn custom(
        name: impl Into<String>,
        weight: f64,
        evaluator: impl Evaluator + 'static,
    ) -> Self {
        Self::new(name, weight, RuleKind::Custom(Arc::new(evaluator)))
    }

    /// Builder: set weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Run the rule's algorithm on `inputs`.
    pub fn evaluate(&self, inputs: &[Trit]) -> Trit {
        self.kind.evaluate(inputs)
    }

    /// Whether this rule runs one of the built-in algorithms.
    pub fn is_builtin(&self) -> bool {
        !matches!(self.kind, RuleKind::Custom(_))
    }
}
