//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the supported MIPS subset: register naming, numeric encodings,
//! the typed instruction representation, and the text decoder, binary encoder
//! and disassembler built on it.

/// Register name mappings.
pub mod abi;

/// Text-to-instruction decoding.
pub mod decode;

/// Instruction disassembler for trace logs and diagnostics.
pub mod disasm;

/// Instruction-to-binary encoding.
pub mod encode;

/// Typed instructions, mnemonics and bit extraction utilities.
pub mod instruction;

/// Opcode and function code tables.
pub mod mips;

pub use decode::decode;
pub use encode::{Encoding, Layout, encode, encode_text};
pub use instruction::{Instruction, InstructionClass, Mnemonic};
