//! Classical stand-in for the Simon sampling circuit
//!
//! Simon's circuit prepares `sum_x |x>|f(x)>`, applies Hadamards to the
//! input register and measures both registers. Measuring the output register
//! first collapses the input register onto one collision class
//! `P = f^-1(f(x))` for a uniform `x`; the input register then reads `y` with
//! probability
//!
//! ```text
//! Pr[y | P] = (sum_{p in P} (-1)^(p . y))^2 / (2^N * |P|)
//! ```
//!
//! [`SimonOracle`] samples exactly this distribution from a precomputed
//! table of collision classes. It does not model amplitudes or gates: the
//! table is the classical counterpart of the bit-flip oracle, built by
//! evaluating `f` once on every input.
//!
//! For a function with hidden period `s` every class is `{x, x ^ s}` and each
//! sample satisfies `y . s = 0`, i.e. `y[1..] . s[1..] = y[0]` when `s[0] = 1`.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use qfeistel_params::construction::MAX_ORACLE_INPUT_BITS;
use qfeistel_api::error::validate;
use qfeistel_api::{BitFunction, EquationOracle, Error, Result};
use rand::Rng;

/// Sampler for Simon measurements of a tabulated function
#[derive(Clone, Debug)]
pub struct SimonOracle<F> {
    function: F,
    input_bits: usize,
    /// Inputs grouped so each collision class is contiguous
    members: Vec<u64>,
    /// `(start, len)` into `members` for the class of each input
    class_of: Vec<(u32, u32)>,
}

impl<F: BitFunction> SimonOracle<F> {
    /// Tabulate `function` over its whole domain
    ///
    /// Requires `2 <= function.input_bits() <= 20`.
    pub fn new(function: F) -> Result<Self> {
        let input_bits = function.input_bits();
        validate::bit_width("SimonOracle", input_bits, MAX_ORACLE_INPUT_BITS)?;
        validate::parameter(input_bits >= 2, "SimonOracle", "need at least one coefficient bit")?;

        let domain = 1u64 << input_bits;
        let mut pairs: Vec<(u64, u64)> = (0..domain).map(|x| (function.evaluate(x), x)).collect();
        pairs.sort_unstable();

        let mut members = Vec::with_capacity(pairs.len());
        let mut class_of = vec![(0u32, 0u32); pairs.len()];
        let mut classes = 0usize;
        let mut start = 0usize;
        while start < pairs.len() {
            let output = pairs[start].0;
            let end = start + pairs[start..].iter().take_while(|&&(y, _)| y == output).count();
            let span = (start as u32, (end - start) as u32);
            for &(_, x) in &pairs[start..end] {
                members.push(x);
                class_of[x as usize] = span;
            }
            classes += 1;
            start = end;
        }

        tracing::trace!(input_bits, classes, "tabulated probe function");

        Ok(Self {
            function,
            input_bits,
            members,
            class_of,
        })
    }

    /// The tabulated function
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Number of input qubits the circuit would use
    pub fn input_bits(&self) -> usize {
        self.input_bits
    }

    /// Inputs sharing `f(x)` with `x`
    pub fn collision_class(&self, x: u64) -> &[u64] {
        let (start, len) = self.class_of[(x & self.domain_mask()) as usize];
        &self.members[start as usize..(start + len) as usize]
    }

    /// Draw one measurement of the input register
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let domain = 1u64 << self.input_bits;
        let class = self.collision_class(rng.gen_range(0..domain));
        let k = class.len() as u64;
        if k == 1 {
            return rng.gen_range(0..domain);
        }

        // Rejection sampling against the uniform proposal; |sum| <= k bounds the weight
        loop {
            let y = rng.gen_range(0..domain);
            let sum: i64 = class
                .iter()
                .map(|&p| if (p & y).count_ones() & 1 == 0 { 1 } else { -1 })
                .sum();
            let weight = (sum * sum) as u64;
            if weight > 0 && rng.gen_range(0..k * k) < weight {
                return y;
            }
        }
    }

    #[inline(always)]
    fn domain_mask(&self) -> u64 {
        (1u64 << self.input_bits) - 1
    }
}

impl<F: BitFunction> EquationOracle for SimonOracle<F> {
    fn width(&self) -> usize {
        self.input_bits - 1
    }

    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u64> {
        if self.members.is_empty() {
            return Err(Error::Oracle {
                context: "SimonOracle::sample",
                message: "oracle table is empty".into(),
            });
        }
        Ok(self.measure(rng))
    }
}
