//! Trait definitions for the qfeistel library

pub mod oracle;
pub mod permutation;

pub use oracle::{BitFunction, EquationOracle};
pub use permutation::{InvertiblePermutation, KeyedPermutation};
