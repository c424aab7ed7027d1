//! Algorithms behind the qfeistel distinguisher
//!
//! This crate holds the exact, classical building blocks the detection
//! procedure is assembled from:
//!
//! - [`linalg`]: bit vectors, GF(2) equations and the online [`Gf2Solver`]
//! - [`feistel`]: balanced Feistel networks with zeroized round keys
//! - [`permutation`]: explicit permutation tables, including uniformly random ones
//! - [`probe`]: the `(n + 1)`-bit probe function whose hidden period exposes
//!   a three-round Feistel network
//! - [`oracle`]: a sampler reproducing the measurement statistics of Simon's circuit
//!
//! The library is usable in both `std` and `no_std` + `alloc` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// GF(2) linear algebra
pub mod linalg;
pub use linalg::{BitVector, Equation, Gf2Solver, Insertion};

// Block permutations
pub mod feistel;
pub mod permutation;
pub use feistel::{FeistelNetwork, RoundFunction, RoundKeys, TableRoundFunction};
pub use permutation::PermutationTable;

// Probe function and sampler
pub mod oracle;
pub mod probe;
pub use oracle::SimonOracle;
pub use probe::PeriodProbe;

// Re-export the shared error type
pub use qfeistel_api::{Error, Result};
