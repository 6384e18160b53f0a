//! Core processor implementation.
//!
//! This module contains the CPU: architectural register state and the
//! execution of decoded instructions against registers and memory.

/// Architectural components (register bank).
pub mod arch;

/// CPU state and instruction execution.
pub mod cpu;

pub use self::cpu::Cpu;
