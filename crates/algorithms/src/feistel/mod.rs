//! Balanced Feistel networks on small blocks
//!
//! A block of `2n` bits is split as `left << n | right`. Each round maps
//! `(l, r)` to `(r, l ^ F(r, k_i))`; decryption walks the keys backwards
//! with `(l, r)` to `(r ^ F(l, k_i), l)`.
//!
//! ## Key handling
//!
//! Round keys live in [`RoundKeys`], which is zeroized on drop the same way
//! block cipher key schedules are.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use qfeistel_params::construction::{FEISTEL_ROUNDS, MAX_HALF_BITS, MAX_TABLE_BITS};
use qfeistel_api::error::validate;
use qfeistel_api::{InvertiblePermutation, KeyedPermutation, Result};
use rand::{CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::permutation::PermutationTable;

/// A keyed round function `F(input, key)` on `n`-bit halves
pub trait RoundFunction {
    /// Evaluate the round function; only the low `n` bits of the result are used
    fn apply(&self, input: u64, key: u64) -> u64;
}

impl<F> RoundFunction for F
where
    F: Fn(u64, u64) -> u64,
{
    fn apply(&self, input: u64, key: u64) -> u64 {
        self(input, key)
    }
}

/// Pearson-style round function: `table[input ^ key]`
#[derive(Clone, Debug)]
pub struct TableRoundFunction {
    table: PermutationTable,
}

impl TableRoundFunction {
    /// Wrap a permutation table on `n`-bit values
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Random table round function on `bits`-bit values
    pub fn random<R: Rng + ?Sized>(bits: usize, rng: &mut R) -> Result<Self> {
        Ok(Self::new(PermutationTable::random(bits, rng)?))
    }

    /// The underlying table
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }
}

impl RoundFunction for TableRoundFunction {
    #[inline]
    fn apply(&self, input: u64, key: u64) -> u64 {
        self.table.get(input ^ key)
    }
}

/// Round key schedule, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(Vec<u64>);

impl RoundKeys {
    /// Wrap explicit round keys
    pub fn new(keys: Vec<u64>) -> Self {
        Self(keys)
    }

    /// Sample `rounds` keys uniformly from `[0, 2^half_bits)`
    pub fn random<R: RngCore + CryptoRng>(half_bits: usize, rounds: usize, rng: &mut R) -> Self {
        let bound = 1u64 << half_bits;
        Self((0..rounds).map(|_| rng.gen_range(0..bound)).collect())
    }

    /// Number of rounds
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the schedule has no rounds
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in round order
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RoundKeys([REDACTED; {}])", self.0.len())
    }
}

/// A balanced Feistel network over `2 * half_bits`-bit blocks
#[derive(Clone, Debug)]
pub struct FeistelNetwork<F> {
    half_bits: usize,
    round_function: F,
    keys: RoundKeys,
}

impl<F: RoundFunction> FeistelNetwork<F> {
    /// Bind a round function and key schedule
    ///
    /// Fails unless `1 <= half_bits <= 31`, at least one round key is given,
    /// and every key fits in `half_bits` bits.
    pub fn new(half_bits: usize, round_function: F, keys: RoundKeys) -> Result<Self> {
        validate::bit_width("FeistelNetwork", half_bits, MAX_HALF_BITS)?;
        validate::parameter(!keys.is_empty(), "FeistelNetwork", "at least one round is required")?;
        for &key in keys.as_slice() {
            validate::max_value("FeistelNetwork round key", key, half_bits)?;
        }
        Ok(Self {
            half_bits,
            round_function,
            keys,
        })
    }

    /// Number of rounds
    pub fn rounds(&self) -> usize {
        self.keys.len()
    }

    /// The round function
    pub fn round_function(&self) -> &F {
        &self.round_function
    }

    /// The key schedule
    pub fn round_keys(&self) -> &RoundKeys {
        &self.keys
    }

    #[inline(always)]
    fn half_mask(&self) -> u64 {
        (1u64 << self.half_bits) - 1
    }

    #[inline(always)]
    fn split(&self, block: u64) -> (u64, u64) {
        let mask = self.half_mask();
        ((block >> self.half_bits) & mask, block & mask)
    }

    #[inline(always)]
    fn join(&self, left: u64, right: u64) -> u64 {
        (left << self.half_bits) | right
    }

    /// Run the rounds forwards
    pub fn encrypt_block(&self, block: u64) -> u64 {
        let mask = self.half_mask();
        let (mut l, mut r) = self.split(block);
        for &key in self.keys.as_slice() {
            let next_r = l ^ (self.round_function.apply(r, key) & mask);
            l = r;
            r = next_r;
        }
        self.join(l, r)
    }

    /// Run the rounds backwards
    pub fn decrypt_block(&self, block: u64) -> u64 {
        let mask = self.half_mask();
        let (mut l, mut r) = self.split(block);
        for &key in self.keys.as_slice().iter().rev() {
            let prev_l = r ^ (self.round_function.apply(l, key) & mask);
            r = l;
            l = prev_l;
        }
        self.join(l, r)
    }
}

impl FeistelNetwork<TableRoundFunction> {
    /// A network with a random Pearson-style round function and random keys
    pub fn random<R: RngCore + CryptoRng>(half_bits: usize, rounds: usize, rng: &mut R) -> Result<Self> {
        validate::bit_width("FeistelNetwork", half_bits, MAX_TABLE_BITS)?;
        let round_function = TableRoundFunction::random(half_bits, rng)?;
        let keys = RoundKeys::random(half_bits, rounds, rng);
        Self::new(half_bits, round_function, keys)
    }

    /// The three-round network targeted by the distinguisher
    pub fn random_three_round<R: RngCore + CryptoRng>(half_bits: usize, rng: &mut R) -> Result<Self> {
        Self::random(half_bits, FEISTEL_ROUNDS, rng)
    }
}

impl<F: RoundFunction> KeyedPermutation for FeistelNetwork<F> {
    fn name(&self) -> &'static str {
        "Feistel network"
    }

    fn half_bits(&self) -> usize {
        self.half_bits
    }

    fn encrypt(&self, block: u64) -> u64 {
        self.encrypt_block(block)
    }
}

impl<F: RoundFunction> InvertiblePermutation for FeistelNetwork<F> {
    fn decrypt(&self, block: u64) -> u64 {
        self.decrypt_block(block)
    }
}
