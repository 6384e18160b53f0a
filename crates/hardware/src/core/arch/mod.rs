//! MIPS architectural state components.
//!
//! This module contains the architecturally visible register state.

/// General-purpose register bank.
pub mod gpr;
