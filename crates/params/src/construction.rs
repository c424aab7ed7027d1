//! Constants for the supporting constructions

/// Default width of one Feistel half, in bits
pub const DEFAULT_HALF_BITS: usize = 8;

/// Number of Feistel rounds the distinguisher targets
pub const FEISTEL_ROUNDS: usize = 3;

/// Largest Feistel half width (blocks must fit in a `u64`)
pub const MAX_HALF_BITS: usize = 31;

/// Largest domain width for an explicit permutation table
pub const MAX_TABLE_BITS: usize = 24;

/// Largest input width the sampling oracle will tabulate
pub const MAX_ORACLE_INPUT_BITS: usize = 20;
