//! Constant values for the qfeistel library
//!
//! Grouped by the component that consumes them.

#![no_std]

pub mod construction;
pub mod detection;
pub mod encoding;
