//! MIPS register naming conventions.
//!
//! Defines the canonical assembly names of the 32 general-purpose registers in
//! encoding order, together with index constants for the registers the engine
//! refers to directly.

/// Canonical register names; the position of a name is its 5-bit encoding.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Register 0 (`$zero`, hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register 8 (`$t0`, default MULT destination).
pub const REG_T0: usize = 8;
/// Register 29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register 31 (`$ra`, return address).
pub const REG_RA: usize = 31;
