//! GF(2) linear algebra
//!
//! Everything here is exact arithmetic over the two-element field: addition
//! is XOR and multiplication is AND.

pub mod bitvec;
pub mod equation;
pub mod solver;

pub use bitvec::BitVector;
pub use equation::Equation;
pub use solver::{Gf2Solver, Insertion};
