//! The period-probe function built from a block permutation
//!
//! Given a permutation `P` on `2n`-bit blocks and two constants `alpha`,
//! `beta`, the probe is the `(n + 1)`-bit to `n`-bit function
//!
//! ```text
//! f(a || b) = W(a || m_b) ^ m_b        m_0 = alpha, m_1 = beta
//! ```
//!
//! where `W` is the left half of `P`'s output. When `P` is a three-round
//! Feistel network, `f(a, b) = F2(a ^ F1(m_b))`, so
//! `f(x) = f(x ^ (1 | (F1(alpha) ^ F1(beta)) << 1))` for every `x`: a hidden
//! period that Simon sampling exposes. A random permutation has no such
//! period.

use qfeistel_api::error::validate;
use qfeistel_api::{BitFunction, KeyedPermutation, Result};
use rand::Rng;

/// The `(n + 1)`-bit probe function over a keyed permutation
#[derive(Clone, Debug)]
pub struct PeriodProbe<P> {
    permutation: P,
    alpha: u64,
    beta: u64,
}

impl<P: KeyedPermutation> PeriodProbe<P> {
    /// Build the probe with explicit constants
    pub fn new(permutation: P, alpha: u64, beta: u64) -> Result<Self> {
        let n = permutation.half_bits();
        validate::parameter(n > 0, "PeriodProbe", "permutation has empty halves")?;
        validate::length("PeriodProbe block width", permutation.block_bits(), 2 * n)?;
        validate::max_value("PeriodProbe alpha", alpha, n)?;
        validate::max_value("PeriodProbe beta", beta, n)?;
        Ok(Self {
            permutation,
            alpha,
            beta,
        })
    }

    /// Build the probe with `alpha` and `beta` drawn uniformly from `[0, 2^n)`
    pub fn random<R: Rng + ?Sized>(permutation: P, rng: &mut R) -> Result<Self> {
        let bound = 1u64 << permutation.half_bits();
        let alpha = rng.gen_range(0..bound);
        let beta = rng.gen_range(0..bound);
        Self::new(permutation, alpha, beta)
    }

    /// The wrapped permutation
    pub fn permutation(&self) -> &P {
        &self.permutation
    }

    /// `(alpha, beta)`
    pub fn constants(&self) -> (u64, u64) {
        (self.alpha, self.beta)
    }

    /// Left half of the permutation's output
    #[inline]
    fn left_half(&self, block: u64) -> u64 {
        let n = self.permutation.half_bits();
        (self.permutation.encrypt(block) >> n) & ((1u64 << n) - 1)
    }
}

impl<P: KeyedPermutation> BitFunction for PeriodProbe<P> {
    fn input_bits(&self) -> usize {
        self.permutation.half_bits() + 1
    }

    fn output_bits(&self) -> usize {
        self.permutation.half_bits()
    }

    fn evaluate(&self, input: u64) -> u64 {
        let n = self.permutation.half_bits();
        let a = (input >> 1) & ((1u64 << n) - 1);
        let mask = if input & 1 == 1 { self.beta } else { self.alpha };
        self.left_half((a << n) | mask) ^ mask
    }
}
