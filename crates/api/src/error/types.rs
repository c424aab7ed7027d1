//! Error type definitions for solver, oracle and detection operations

use alloc::string::String;

/// Primary error type for qfeistel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An equation reduced to `0 = 1` against the current independent set
    InconsistentEquation {
        /// Rank of the independent set the equation was checked against
        rank: usize,
    },

    /// `solve` was called before the independent set reached full rank
    UnsolvedSystem {
        /// Current number of independent equations
        rank: usize,
        /// Number of unknowns
        width: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The oracle could not produce a sample
    Oracle {
        context: &'static str,
        message: String,
    },
}

/// Result type for qfeistel operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Oracle { message, .. } => Self::Oracle { context, message },
            other => other,
        }
    }

    /// Whether the caller may discard the offending sample and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InconsistentEquation { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InconsistentEquation { rank } => {
                write!(f, "Inconsistent equation: reduces to 0 = 1 against rank {}", rank)
            }
            Self::UnsolvedSystem { rank, width } => {
                write!(f, "Unsolved system: rank {} of {} unknowns", rank, width)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            }
            Self::Oracle { context, message } => {
                write!(f, "Oracle error: {}: {}", context, message)
            }
        }
    }
}
