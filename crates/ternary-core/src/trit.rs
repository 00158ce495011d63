//! The ternary value domain.
//!
//! A [`Trit`] is one of FALSE (-1), UNKNOWN (0), or TRUE (1). The ordinal
//! defines a total order FALSE < UNKNOWN < TRUE, so Kleene AND/OR are plain
//! min/max and Łukasiewicz negation is arithmetic negation.

use std::fmt;
use std::ops::{Neg, Not};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TernaryError;

/// Confidence reported for a raw value outside the trit domain.
pub const INVALID_CONFIDENCE: f64 = -1.0;

/// Label reported for a raw value outside the trit domain.
pub const INVALID_LABEL: &str = "? INVALID";

/// A ternary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Trit {
    /// Definite negative.
    False = -1,
    /// Indeterminate.
    Unknown = 0,
    /// Definite positive.
    True = 1,
}

impl Trit {
    /// All three values in ordinal order.
    pub const ALL: [Trit; 3] = [Trit::False, Trit::Unknown, Trit::True];

    /// Ordinal value: -1, 0, or 1.
    pub const fn ordinal(self) -> i8 {
        self as i8
    }

    /// Convert a raw ordinal back into a trit.
    pub const fn from_raw(raw: i8) -> Option<Trit> {
        match raw {
            -1 => Some(Trit::False),
            0 => Some(Trit::Unknown),
            1 => Some(Trit::True),
            _ => None,
        }
    }

    /// Ordinal minimum (Kleene strong AND).
    pub fn min(self, other: Trit) -> Trit {
        Ord::min(self, other)
    }

    /// Ordinal maximum (Kleene strong OR).
    pub fn max(self, other: Trit) -> Trit {
        Ord::max(self, other)
    }

    /// Łukasiewicz negation: swaps TRUE and FALSE, fixes UNKNOWN.
    pub const fn negate(self) -> Trit {
        match self {
            Trit::False => Trit::True,
            Trit::Unknown => Trit::Unknown,
            Trit::True => Trit::False,
        }
    }

    /// Fixed confidence scalar for this value.
    pub const fn confidence(self) -> f64 {
        match self {
            Trit::True => 1.0,
            Trit::False => 0.0,
            Trit::Unknown => 0.5,
        }
    }

    /// Human-readable label used in audit output.
    pub const fn describe(self) -> &'static str {
        match self {
            Trit::True => "█ TRUE",
            Trit::False => "░ FALSE",
            Trit::Unknown => "▒ UNKNOWN",
        }
    }

    /// Whether this trit is TRUE or FALSE.
    pub const fn is_known(self) -> bool {
        !matches!(self, Trit::Unknown)
    }
}

/// Confidence for a raw ordinal, with a sentinel for out-of-domain values.
pub fn raw_confidence(raw: i8) -> f64 {
    Trit::from_raw(raw).map_or(INVALID_CONFIDENCE, Trit::confidence)
}

/// Label for a raw ordinal, with a fallback for out-of-domain values.
pub fn raw_describe(raw: i8) -> &'static str {
    Trit::from_raw(raw).map_or(INVALID_LABEL, Trit::describe)
}

impl Not for Trit {
    type Output = Trit;

    fn not(self) -> Trit {
        self.negate()
    }
}

impl Neg for Trit {
    type Output = Trit;

    fn neg(self) -> Trit {
        self.negate()
    }
}

impl From<Trit> for i8 {
    fn from(t: Trit) -> i8 {
        t.ordinal()
    }
}

impl TryFrom<i8> for Trit {
    type Error = TernaryError;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        Trit::from_raw(raw).ok_or(TernaryError::InvalidRawTrit(raw))
    }
}

impl From<bool> for Trit {
    fn from(b: bool) -> Trit {
        if b {
            Trit::True
        } else {
            Trit::False
        }
    }
}

impl From<Option<bool>> for Trit {
    fn from(b: Option<bool>) -> Trit {
        b.map_or(Trit::Unknown, Trit::from)
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::True => write!(f, "TRUE"),
            Trit::False => write!(f, "FALSE"),
            Trit::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl FromStr for Trit {
    type Err = TernaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "+1" | "+" => Ok(Trit::True),
            "false" | "f" | "-1" | "-" => Ok(Trit::False),
            "unknown" | "u" | "0" | "?" => Ok(Trit::Unknown),
            _ => Err(TernaryError::InvalidTrit(s.to_string())),
        }
    }
}
