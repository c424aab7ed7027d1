//! Constants for the detection procedure

/// Accepted-round budget is `BUDGET_FACTOR * width`
pub const BUDGET_FACTOR: usize = 2;

/// Number of `f(u) == f(u ^ s)` probes drawn after solving
pub const VERIFICATION_PROBES: usize = 1;
