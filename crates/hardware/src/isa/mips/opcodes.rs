//! MIPS Primary Opcodes.
//!
//! Defines the 6-bit primary opcodes (bits 31-26) of the supported subset.
//! `PRINT`, `PRINTS` and `HALT` have no MIPS counterpart and sit in otherwise
//! unused opcode space.

/// Register-register operations (ADD, SUB, AND, OR, SLT, SLL, MULT); see `funct`.
pub const OP_SPECIAL: u32 = 0b000000;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0b001000;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0b001010;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;

/// Load word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store word (SW).
pub const OP_SW: u32 = 0b101011;

/// Print a string constant (PRINTS). Didactic only.
pub const OP_PRINTS: u32 = 0b111101;

/// Stop the program (EXIT/HALT). Didactic only.
pub const OP_HALT: u32 = 0b111110;

/// Print a register value (PRINT). Didactic only.
pub const OP_PRINT: u32 = 0b111111;
