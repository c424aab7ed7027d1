//! Error handling for the qfeistel ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

#[cfg(feature = "std")]
use std::error::Error as StdError;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl StdError for Error {}

// Specialized result types for different operations
pub type SolverResult<T> = Result<T>;
pub type OracleResult<T> = Result<T>;
