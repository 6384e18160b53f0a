//! Instruction Encoder.
//!
//! Re-encodes a decoded instruction into the simplified 32-bit binary form shown
//! in the execution trace. Field layouts follow the MIPS R- and I-formats:
//!
//! ```text
//! R      opcode(6) | rs(5)  | rt(5) | rd(5) | shamt(5) | funct(6)
//! I      opcode(6) | rs(5)  | rt(5) | imm(16)
//! PRINT  opcode(6) | 0(16)  | reg(5) | 0(5)
//! bare   opcode(6) | 0(26)
//! ```
//!
//! Branch displacements are always encoded as zero, and `PRINT`, `PRINTS` and
//! `HALT` use reserved opcodes with no MIPS counterpart.

use std::fmt;

use crate::common::Register;
use crate::common::constants::INSTRUCTION_BITS;
use crate::isa::decode::decode;
use crate::isa::instruction::{
    IMM_MASK, Instruction, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT,
};
use crate::isa::mips::{funct, opcodes};

/// Field layout family of an encoding; determines how the bits are grouped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `opcode | rs | rt | rd | shamt | funct` (ADD, SUB, AND, OR, SLT, SLL).
    Register,
    /// `opcode | rs | rt | 0(10) | funct` (MULT).
    Multiply,
    /// `opcode | rs | rt | imm(16)` (ADDI, SLTI, LW, SW, LUI, BEQ, BNE).
    Immediate,
    /// `opcode | 0(16) | reg | 0(5)` (PRINT).
    Print,
    /// `opcode | 0(26)` (PRINTS, HALT).
    Bare,
}

impl Layout {
    /// Field widths in bits, most significant first. Always sums to 32.
    pub const fn field_widths(self) -> &'static [usize] {
        match self {
            Self::Register => &[6, 5, 5, 5, 5, 6],
            Self::Multiply => &[6, 5, 5, 10, 6],
            Self::Immediate => &[6, 5, 5, 16],
            Self::Print => &[6, 16, 5, 5],
            Self::Bare => &[6, 26],
        }
    }
}

/// A 32-bit instruction encoding together with its field layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    word: u32,
    layout: Layout,
}

impl Encoding {
    /// The encoded word.
    pub const fn word(self) -> u32 {
        self.word
    }

    /// The layout the word was built with.
    pub const fn layout(self) -> Layout {
        self.layout
    }

    /// The word as exactly 32 `0`/`1` characters, most significant bit first.
    pub fn bits(self) -> String {
        format!("{:0width$b}", self.word, width = INSTRUCTION_BITS)
    }

    /// The bit string with a space between fields, for reading.
    pub fn grouped(self) -> String {
        let bits = self.bits();
        let mut fields = Vec::with_capacity(self.layout.field_widths().len());
        let mut start = 0;
        for width in self.layout.field_widths() {
            fields.push(&bits[start..start + width]);
            start += width;
        }
        fields.join(" ")
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.word, width = INSTRUCTION_BITS)
    }
}

/// Bit shift of the register field in a `PRINT` encoding (bits 5-9).
const PRINT_REG_SHIFT: u32 = 5;

#[inline]
const fn reg(r: Register) -> u32 {
    r.index() as u32 & REG_MASK
}

#[inline]
const fn r_type(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (opcodes::OP_SPECIAL << OPCODE_SHIFT)
        | (rs << RS_SHIFT)
        | (rt << RT_SHIFT)
        | (rd << RD_SHIFT)
        | ((shamt & REG_MASK) << SHAMT_SHIFT)
        | funct
}

#[inline]
const fn i_type(opcode: u32, rs: u32, rt: u32, imm: i64) -> u32 {
    // Truncating to 16 bits keeps the two's-complement pattern of negatives.
    (opcode << OPCODE_SHIFT) | (rs << RS_SHIFT) | (rt << RT_SHIFT) | (imm as u32 & IMM_MASK)
}

/// Encodes a decoded instruction.
pub const fn encode(inst: &Instruction) -> Encoding {
    use Instruction as I;
    let (word, layout) = match inst {
        I::Add { rd, rs, rt } => (r_type(reg(*rs), reg(*rt), reg(*rd), 0, funct::ADD), Layout::Register),
        I::Sub { rd, rs, rt } => (r_type(reg(*rs), reg(*rt), reg(*rd), 0, funct::SUB), Layout::Register),
        I::And { rd, rs, rt } => (r_type(reg(*rs), reg(*rt), reg(*rd), 0, funct::AND), Layout::Register),
        I::Or { rd, rs, rt } => (r_type(reg(*rs), reg(*rt), reg(*rd), 0, funct::OR), Layout::Register),
        I::Slt { rd, rs, rt } => (r_type(reg(*rs), reg(*rt), reg(*rd), 0, funct::SLT), Layout::Register),
        I::Sll { rd, rt, shamt } => (r_type(0, reg(*rt), reg(*rd), *shamt, funct::SLL), Layout::Register),
        I::Mult { rs, rt } => (r_type(reg(*rs), reg(*rt), 0, 0, funct::MULT), Layout::Multiply),

        I::Addi { rt, rs, imm } => (i_type(opcodes::OP_ADDI, reg(*rs), reg(*rt), *imm), Layout::Immediate),
        I::Slti { rt, rs, imm } => (i_type(opcodes::OP_SLTI, reg(*rs), reg(*rt), *imm), Layout::Immediate),
        I::Lw { rt, offset, base } => (i_type(opcodes::OP_LW, reg(*base), reg(*rt), *offset), Layout::Immediate),
        I::Sw { rt, offset, base } => (i_type(opcodes::OP_SW, reg(*base), reg(*rt), *offset), Layout::Immediate),
        I::Lui { rt, imm } => (i_type(opcodes::OP_LUI, 0, reg(*rt), *imm), Layout::Immediate),

        I::Beq { rs, rt, .. } => (i_type(opcodes::OP_BEQ, reg(*rs), reg(*rt), 0), Layout::Immediate),
        I::Bne { rs, rt, .. } => (i_type(opcodes::OP_BNE, reg(*rs), reg(*rt), 0), Layout::Immediate),

        I::Print { reg: r } => ((opcodes::OP_PRINT << OPCODE_SHIFT) | (reg(*r) << PRINT_REG_SHIFT), Layout::Print),
        I::Prints { .. } => (opcodes::OP_PRINTS << OPCODE_SHIFT, Layout::Bare),
        I::Halt => (opcodes::OP_HALT << OPCODE_SHIFT, Layout::Bare),
    };
    Encoding { word, layout }
}

/// Encodes raw instruction text into its 32-character bit string.
///
/// Returns `None` when the text does not decode to a supported instruction.
pub fn encode_text(text: &str) -> Option<String> {
    decode(text).ok().map(|inst| encode(&inst).bits())
}
