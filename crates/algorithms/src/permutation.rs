//! Explicit permutation tables
//!
//! A [`PermutationTable`] stores a bijection on `bits`-bit integers as a
//! lookup table. It backs both the Pearson-style Feistel round function and
//! the uniformly random block permutation the distinguisher is tested
//! against.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use qfeistel_params::construction::MAX_TABLE_BITS;
use qfeistel_api::error::validate;
use qfeistel_api::{Error, InvertiblePermutation, KeyedPermutation, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A bijection on `[0, 2^bits)` stored as a table
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    bits: usize,
    table: Vec<u64>,
}

impl PermutationTable {
    /// The identity permutation
    pub fn identity(bits: usize) -> Result<Self> {
        validate::bit_width("PermutationTable", bits, MAX_TABLE_BITS)?;
        Ok(Self {
            bits,
            table: (0..1u64 << bits).collect(),
        })
    }

    /// A uniformly random permutation (Fisher–Yates)
    pub fn random<R: Rng + ?Sized>(bits: usize, rng: &mut R) -> Result<Self> {
        let mut perm = Self::identity(bits)?;
        perm.table.shuffle(rng);
        Ok(perm)
    }

    /// Wrap an existing table, checking that it is a bijection on a power-of-two domain
    pub fn from_table(table: Vec<u64>) -> Result<Self> {
        let len = table.len();
        validate::parameter(len.is_power_of_two(), "PermutationTable::from_table", "length must be a power of two")?;
        let bits = len.trailing_zeros() as usize;
        validate::bit_width("PermutationTable::from_table", bits, MAX_TABLE_BITS)?;

        let mut seen = vec![false; len];
        for &value in &table {
            let slot = seen
                .get_mut(value as usize)
                .ok_or_else(|| Error::param("PermutationTable::from_table", "value outside the domain"))?;
            if *slot {
                return Err(Error::param("PermutationTable::from_table", "table is not a bijection"));
            }
            *slot = true;
        }

        Ok(Self { bits, table })
    }

    /// Domain width in bits
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of entries, `2^bits`
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; tables hold at least two entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up `x`; bits above `bits` are ignored
    #[inline]
    pub fn get(&self, x: u64) -> u64 {
        self.table[(x & self.mask()) as usize]
    }

    /// The inverse bijection
    pub fn inverse(&self) -> Self {
        let mut table = vec![0u64; self.table.len()];
        for (x, &y) in self.table.iter().enumerate() {
            table[y as usize] = x as u64;
        }
        Self { bits: self.bits, table }
    }

    /// The raw table
    pub fn as_slice(&self) -> &[u64] {
        &self.table
    }

    #[inline(always)]
    fn mask(&self) -> u64 {
        (1u64 << self.bits) - 1
    }
}

impl core::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}

impl KeyedPermutation for PermutationTable {
    fn name(&self) -> &'static str {
        "random permutation"
    }

    /// Half of the table width; tables used as block permutations have even width
    fn half_bits(&self) -> usize {
        self.bits / 2
    }

    fn block_bits(&self) -> usize {
        self.bits
    }

    fn encrypt(&self, block: u64) -> u64 {
        self.get(block)
    }
}

impl InvertiblePermutation for PermutationTable {
    fn decrypt(&self, block: u64) -> u64 {
        // Linear scan keeps the table single-sided; call `inverse()` for bulk use
        self.table
            .iter()
            .position(|&y| y == block & self.mask())
            .map(|x| x as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_random_table_is_bijection() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let perm = PermutationTable::random(10, &mut rng).unwrap();
        assert_eq!(perm.len(), 1024);

        let mut sorted = perm.as_slice().to_vec();
        sorted.sort_unstable();
        assert!(sorted.iter().enumerate().all(|(i, &v)| v == i as u64));

        // The round trip through from_table accepts it
        assert!(PermutationTable::from_table(perm.as_slice().to_vec()).is_ok());
    }

    #[test]
    fn test_inverse_and_decrypt() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let perm = PermutationTable::random(8, &mut rng).unwrap();
        let inv = perm.inverse();
        for x in 0..256u64 {
            assert_eq!(inv.get(perm.get(x)), x);
            assert_eq!(perm.decrypt(perm.encrypt(x)), x);
        }
    }

    #[test]
    fn test_from_table_rejects_bad_tables() {
        assert!(PermutationTable::from_table(vec![0, 1, 2]).is_err());
        assert!(PermutationTable::from_table(vec![0, 0, 1, 2]).is_err());
        assert!(PermutationTable::from_table(vec![0, 1, 2, 4]).is_err());
        assert!(PermutationTable::from_table(vec![3, 1, 2, 0]).is_ok());
    }

    #[test]
    fn test_width_limits() {
        assert!(PermutationTable::identity(0).is_err());
        assert!(PermutationTable::identity(MAX_TABLE_BITS + 1).is_err());
        let id = PermutationTable::identity(4).unwrap();
        assert_eq!(id.get(0x1f), 0xf);
        assert_eq!(id.half_bits(), 2);
        assert_eq!(id.block_bits(), 4);
    }
}
