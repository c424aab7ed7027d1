//! Error types for the detection driver

use thiserror::Error;

/// Errors raised while configuring or running a detection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// The solver, oracle or a construction rejected its input
    #[error("solver error: {0}")]
    Solver(#[from] qfeistel_api::Error),

    /// The configuration is out of range or could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DetectError {
    /// Shorthand to create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for detection operations
pub type Result<T> = std::result::Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_convert() {
        let err: DetectError = qfeistel_api::Error::UnsolvedSystem { rank: 2, width: 8 }.into();
        assert!(matches!(err, DetectError::Solver(_)));
        assert!(err.to_string().starts_with("solver error: "));
    }

    #[test]
    fn test_config_display() {
        let err = DetectError::config("width must be in 1..=63");
        assert_eq!(err.to_string(), "invalid configuration: width must be in 1..=63");
    }
}
