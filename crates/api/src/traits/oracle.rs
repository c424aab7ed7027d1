// File: crates/api/src/traits/oracle.rs

//! Oracle contracts consumed by the detection procedure
//!
//! The detection procedure talks to two collaborators that must be backed by
//! the same underlying mapping: a [`BitFunction`] it evaluates directly during
//! verification, and an [`EquationOracle`] that turns that function into a
//! stream of linear equation samples.

use crate::Result;
use rand::Rng;

/// A classical function `{0,1}^input_bits -> {0,1}^output_bits`.
pub trait BitFunction {
    /// Number of meaningful input bits.
    fn input_bits(&self) -> usize;

    /// Number of meaningful output bits.
    fn output_bits(&self) -> usize;

    /// Evaluate the function. Bits above `input_bits` are ignored.
    fn evaluate(&self, input: u64) -> u64;
}

impl<F: BitFunction + ?Sized> BitFunction for &F {
    fn input_bits(&self) -> usize {
        (**self).input_bits()
    }

    fn output_bits(&self) -> usize {
        (**self).output_bits()
    }

    fn evaluate(&self, input: u64) -> u64 {
        (**self).evaluate(input)
    }
}

/// A source of raw linear-equation samples.
///
/// Every sample is a packed measurement: bit 0 is the target bit and bits
/// `1..=width` are the coefficients. A well-formed oracle only produces
/// samples satisfying `coefficients · s = target` for its hidden mask `s`.
pub trait EquationOracle {
    /// Number of coefficient bits `W` in each sample.
    fn width(&self) -> usize;

    /// Draw one raw measurement.
    ///
    /// # Requirements
    /// - Must use the provided RNG for all randomness.
    /// - Bits above `width + 1` must be zero.
    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u64>;
}
