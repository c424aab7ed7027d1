// File: crates/api/src/traits/permutation.rs

//! Keyed permutations over two-halves blocks

/// A keyed bijection on `2 * half_bits`-bit blocks.
///
/// Blocks are laid out as `left << half_bits | right`.
pub trait KeyedPermutation {
    /// Returns the construction name.
    fn name(&self) -> &'static str;

    /// Width of one half of a block.
    fn half_bits(&self) -> usize;

    /// Width of a full block.
    fn block_bits(&self) -> usize {
        2 * self.half_bits()
    }

    /// Apply the permutation to a block.
    fn encrypt(&self, block: u64) -> u64;
}

impl<P: KeyedPermutation + ?Sized> KeyedPermutation for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn half_bits(&self) -> usize {
        (**self).half_bits()
    }

    fn block_bits(&self) -> usize {
        (**self).block_bits()
    }

    fn encrypt(&self, block: u64) -> u64 {
        (**self).encrypt(block)
    }
}

/// A keyed permutation whose inverse is available.
pub trait InvertiblePermutation: KeyedPermutation {
    /// Apply the inverse permutation to a block.
    fn decrypt(&self, block: u64) -> u64;
}
