//! Validation utilities shared by the qfeistel crates

use super::{Error, Result};
use alloc::format;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a value lies in `1..=max`
#[inline(always)]
pub fn bit_width(context: &'static str, bits: usize, max: usize) -> Result<()> {
    if bits == 0 || bits > max {
        return Err(Error::param(
            context,
            format!("bit width must be in 1..={}, got {}", max, bits),
        ));
    }
    Ok(())
}

/// Validate that `value` fits in `bits` bits
#[inline(always)]
pub fn max_value(context: &'static str, value: u64, bits: usize) -> Result<()> {
    if bits < 64 && value >> bits != 0 {
        return Err(Error::param(
            context,
            format!("value {:#x} does not fit in {} bits", value, bits),
        ));
    }
    Ok(())
}
