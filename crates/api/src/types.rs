//! Classification types reported by the detection procedure

use core::fmt;

/// Terminal outcome of a detection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Classification {
    /// Matches the targeted round-limited Feistel family
    Structured,
    /// Behaves like a generic random permutation
    Unstructured,
}

impl Classification {
    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structured => "3-round Feistel",
            Self::Unstructured => "random permutation",
        }
    }

    /// Whether this is the structured outcome
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why the detection procedure reached its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionReason {
    /// The solved mask was confirmed as a period of the probe function
    Verified,
    /// The solved mask failed the period check
    Refuted,
    /// The sampling budget ran out before full rank
    BudgetExhausted,
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified => f.write_str("solved equation"),
            Self::Refuted => f.write_str("solved mask is not a period"),
            Self::BudgetExhausted => f.write_str("sampling budget exhausted"),
        }
    }
}
