//! Public API traits and types for the qfeistel library
//!
//! This crate provides the public API surface shared by the solver, the
//! supporting constructions and the detection driver: the error type, the
//! oracle and permutation traits, and the classification types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{Classification, DecisionReason};

// Re-export all traits from the traits module
pub use traits::{BitFunction, EquationOracle, InvertiblePermutation, KeyedPermutation};
