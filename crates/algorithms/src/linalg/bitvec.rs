//! Fixed-width bit vectors over GF(2)
//!
//! Bit `i` of a [`BitVector`] is coordinate `i` of the vector. Storage is a
//! run of `u64` words, least significant bit first, and any bits past
//! `width` in the last word are kept clear.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::fmt;
use core::ops::BitXorAssign;

use qfeistel_params::encoding::WORD_BITS;
use qfeistel_api::error::validate;
use qfeistel_api::Result;
use rand::Rng;

/// A vector over GF(2) with a width fixed at construction
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    width: usize,
    words: Vec<u64>,
}

#[inline(always)]
fn words_for(width: usize) -> usize {
    (width + WORD_BITS - 1) / WORD_BITS
}

impl BitVector {
    /// The all-zero vector of the given width
    pub fn zeros(width: usize) -> Self {
        Self {
            width,
            words: vec![0u64; words_for(width)],
        }
    }

    /// Build a vector from individual bits, index 0 first
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut v = Self::zeros(bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            v.set(i, bit);
        }
        v
    }

    /// Build a vector from the low `width` bits of `value`
    ///
    /// Fails if `width > 64` or if `value` has bits set at or above `width`.
    pub fn from_u64(value: u64, width: usize) -> Result<Self> {
        validate::parameter(width <= WORD_BITS, "BitVector::from_u64", "width exceeds 64 bits")?;
        validate::max_value("BitVector::from_u64", value, width)?;
        let mut v = Self::zeros(width);
        if width > 0 {
            v.words[0] = value;
        }
        Ok(v)
    }

    /// Sample a uniformly random vector
    pub fn random<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        let mut v = Self::zeros(width);
        for word in v.words.iter_mut() {
            *word = rng.gen();
        }
        v.clear_tail();
        v
    }

    /// Pack the vector into a `u64`, bit `i` at position `i`
    pub fn to_u64(&self) -> Result<u64> {
        validate::parameter(self.width <= WORD_BITS, "BitVector::to_u64", "width exceeds 64 bits")?;
        Ok(self.words.first().copied().unwrap_or(0))
    }

    /// Number of coordinates
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read coordinate `index`
    ///
    /// # Panics
    /// Panics if `index >= width`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.width, "bit index {} out of range for width {}", index, self.width);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Write coordinate `index`
    ///
    /// # Panics
    /// Panics if `index >= width`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.width, "bit index {} out of range for width {}", index, self.width);
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// True if every coordinate is zero
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Hamming weight
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Index of the lowest set coordinate
    pub fn first_one(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i * WORD_BITS + w.trailing_zeros() as usize)
    }

    /// Inner product over GF(2): parity of the bitwise AND
    ///
    /// # Panics
    /// Panics if the widths differ.
    pub fn dot(&self, other: &Self) -> bool {
        assert_eq!(self.width, other.width, "dot product of vectors with different widths");
        self.words
            .iter()
            .zip(other.words.iter())
            .fold(0u32, |acc, (a, b)| acc ^ (a & b).count_ones())
            & 1
            == 1
    }

    /// Copy into a vector of `width` coordinates, truncating or zero-extending
    pub fn resized(&self, width: usize) -> Self {
        let mut v = Self::zeros(width);
        let shared = v.words.len().min(self.words.len());
        v.words[..shared].copy_from_slice(&self.words[..shared]);
        v.clear_tail();
        v
    }

    fn clear_tail(&mut self) {
        let rem = self.width % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    /// Vector addition over GF(2)
    ///
    /// # Panics
    /// Panics if the widths differ.
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        assert_eq!(self.width, rhs.width, "xor of vectors with different widths");
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a ^= b;
        }
    }
}

impl fmt::Display for BitVector {
    /// Coordinates written index 0 first, e.g. `100` has only bit 0 set
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.width {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({})", self)
    }
}
