//! Linear equations over GF(2)
//!
//! An [`Equation`] is `coefficients · x = target`. The packed form used
//! across the oracle boundary keeps the target in bit 0 and coefficient `i`
//! in bit `i + 1`.

use core::fmt;

use qfeistel_params::encoding::{COEFFICIENT_SHIFT, MAX_PACKED_WIDTH};
use qfeistel_api::error::validate;
use qfeistel_api::Result;

use super::BitVector;

/// A single equation `coefficients · x = target`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    coefficients: BitVector,
    target: bool,
}

impl Equation {
    /// Create an equation from its coefficient row and right-hand side
    pub fn new(coefficients: BitVector, target: bool) -> Self {
        Self { coefficients, target }
    }

    /// Decode a packed measurement into an equation over `width` unknowns
    ///
    /// Bits above `width + 1` must be clear.
    pub fn unpack(raw: u64, width: usize) -> Result<Self> {
        validate::bit_width("Equation::unpack", width, MAX_PACKED_WIDTH)?;
        validate::max_value("Equation::unpack", raw, width + 1)?;
        let coefficients = BitVector::from_u64(raw >> COEFFICIENT_SHIFT, width)?;
        Ok(Self::new(coefficients, raw & 1 == 1))
    }

    /// Encode into the packed form
    pub fn pack(&self) -> Result<u64> {
        validate::bit_width("Equation::pack", self.width(), MAX_PACKED_WIDTH)?;
        let coefficients = self.coefficients.to_u64()?;
        Ok((coefficients << COEFFICIENT_SHIFT) | self.target as u64)
    }

    /// Coefficient row
    pub fn coefficients(&self) -> &BitVector {
        &self.coefficients
    }

    /// Right-hand side
    pub fn target(&self) -> bool {
        self.target
    }

    /// Number of unknowns
    pub fn width(&self) -> usize {
        self.coefficients.width()
    }

    /// Check whether `x` satisfies this equation
    ///
    /// # Panics
    /// Panics if `x` has a different width.
    pub fn is_satisfied_by(&self, x: &BitVector) -> bool {
        self.coefficients.dot(x) == self.target
    }

    /// The row `[coefficients | target]` with the target in column `width`
    pub(crate) fn augmented(&self) -> BitVector {
        let width = self.width();
        let mut row = self.coefficients.resized(width + 1);
        row.set(width, self.target);
        row
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equation({} = {})", self.coefficients, self.target as u8)
    }
}
