//! Packed-integer encoding constants

/// Shift of the first coefficient bit in packed form (bit 0 is the target)
pub const COEFFICIENT_SHIFT: u32 = 1;

/// Largest unknown width that can be packed into a `u64`
pub const MAX_PACKED_WIDTH: usize = 63;

/// Bits per storage word of a bit vector
pub const WORD_BITS: usize = 64;
