//! Reference models and shared helpers for the qfeistel integration tests
//!
//! The models here are deliberately brute force: they enumerate every
//! assignment of `width` unknowns, so they only make sense for small widths.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Parity of the set bits of `x`
pub fn parity(x: u64) -> bool {
    x.count_ones() & 1 == 1
}

/// Pack coefficient bits and a target into a measurement
pub fn pack(coefficients: u64, target: bool) -> u64 {
    (target as u64) | (coefficients << 1)
}

/// Read a bit string written index 0 first, so `"100"` is `0b001`
pub fn bits(text: &str) -> u64 {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| c == '1')
        .fold(0, |acc, (i, _)| acc | (1 << i))
}

/// Whether assignment `x` satisfies the packed equation `raw`
pub fn satisfies(raw: u64, x: u64) -> bool {
    parity((raw >> 1) & x) == (raw & 1 == 1)
}

/// Every assignment of `width` unknowns satisfying all `equations`
pub fn solutions(equations: &[u64], width: usize) -> Vec<u64> {
    (0..1u64 << width)
        .filter(|&x| equations.iter().all(|&raw| satisfies(raw, x)))
        .collect()
}

/// Rank of a consistent system, from the size of its solution set
///
/// Returns `None` if the system has no solution.
pub fn reference_rank(equations: &[u64], width: usize) -> Option<usize> {
    let count = solutions(equations, width).len();
    if count == 0 {
        None
    } else {
        Some(width - count.trailing_zeros() as usize)
    }
}

/// Deterministic RNG for a test case
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_strings() {
        assert_eq!(bits("100"), 0b001);
        assert_eq!(bits("110"), 0b011);
        assert_eq!(bits("011"), 0b110);
    }

    #[test]
    fn test_reference_rank() {
        // x0 ^ x1 = 1 and x1 ^ x2 = 0 over three unknowns
        let system = [pack(bits("110"), true), pack(bits("011"), false)];
        assert_eq!(reference_rank(&system, 3), Some(2));
        assert_eq!(reference_rank(&[], 3), Some(0));

        let contradiction = [pack(bits("100"), false), pack(bits("100"), true)];
        assert_eq!(reference_rank(&contradiction, 3), None);
    }
}
