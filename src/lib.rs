//! # qfeistel
//!
//! Distinguish three-round Feistel networks from random permutations with
//! Simon-style period sampling, built around an online GF(2) solver.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qfeistel = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `detect` (default): the detection driver and its configuration
//! - `serde`: serialization of classifications, detections and configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`qfeistel-api`]: error type, oracle and permutation traits, classifications
//! - [`qfeistel-params`]: widths, limits and detection defaults
//! - [`qfeistel-algorithms`]: GF(2) solver, Feistel networks, probe and sampling oracle
//! - [`qfeistel-detect`]: the detection procedure and experiment helpers

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use qfeistel_algorithms as algorithms;
pub use qfeistel_api as api;
pub use qfeistel_params as params;

// Feature-gated re-exports
#[cfg(feature = "detect")]
pub use qfeistel_detect as detect;

/// Common imports for qfeistel users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{BitFunction, EquationOracle, InvertiblePermutation, KeyedPermutation};

    // Re-export classification types
    pub use crate::api::{Classification, DecisionReason};

    // Re-export the solver and constructions
    pub use crate::algorithms::{
        BitVector, Equation, FeistelNetwork, Gf2Solver, Insertion, PeriodProbe, PermutationTable, SimonOracle,
    };

    #[cfg(feature = "detect")]
    pub use crate::detect::{distinguish, run_trials, DetectError, Detection, Detector, DetectorConfig, TrialSummary};
}
