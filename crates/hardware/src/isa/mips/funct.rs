//! MIPS Function Codes.
//!
//! Defines the 6-bit function codes (bits 5-0) distinguishing operations that
//! share the `SPECIAL` primary opcode.

/// Shift left logical (SLL).
pub const SLL: u32 = 0b000000;

/// Multiply (MULT).
pub const MULT: u32 = 0b011000;

/// Add (ADD).
pub const ADD: u32 = 0b100000;

/// Subtract (SUB).
pub const SUB: u32 = 0b100010;

/// Bitwise AND (AND).
pub const AND: u32 = 0b100100;

/// Bitwise OR (OR).
pub const OR: u32 = 0b100101;

/// Set on less than (SLT).
pub const SLT: u32 = 0b101010;
