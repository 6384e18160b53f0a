//! Memory-side components of the simulated machine.
//!
//! The teaching subset has a single flat data memory and no devices; loads and
//! stores go straight to it.

/// Sparse data memory.
pub mod memory;

pub use memory::Memory;
