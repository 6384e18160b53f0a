//! MIPS instruction subset encodings.
//!
//! Defines the numeric fields used when re-encoding instructions.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26), including the reserved didactic ones.
//! - `funct`: Function codes (bits 5-0) selecting the operation of `SPECIAL` instructions.

/// Function code definitions for `SPECIAL` (R-format) instructions.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;
