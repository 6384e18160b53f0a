//! Instruction representation and field extraction.
//!
//! Provides the typed [`Instruction`] produced by the decoder and consumed by
//! the CPU and the encoder, the [`Mnemonic`] table of the supported subset, and
//! bit extraction helpers for encoded 32-bit words.

use std::fmt;
use std::str::FromStr;

use crate::common::{Register, SimError};

/// Bit shift of the primary opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit shift of the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift of the `shamt` field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit mask of the 6-bit opcode and funct fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask of a 5-bit register or shift amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask of the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Trait for extracting MIPS fields from an encoded instruction word.
pub trait InstructionBits {
    /// Primary opcode (bits 26-31).
    fn opcode(&self) -> u32;
    /// First source register field (bits 21-25).
    fn rs(&self) -> usize;
    /// Second source / I-format target register field (bits 16-20).
    fn rt(&self) -> usize;
    /// R-format destination register field (bits 11-15).
    fn rd(&self) -> usize;
    /// Shift amount field (bits 6-10).
    fn shamt(&self) -> u32;
    /// Function code (bits 0-5).
    fn funct(&self) -> u32;
    /// Raw 16-bit immediate (bits 0-15), not sign-extended.
    fn imm16(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }
}

/// Mnemonics of the supported instruction subset.
///
/// Matching is case-insensitive; `EXIT` and `HALT` are distinct spellings of
/// the same operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// `ADD rd, rs, rt`
    Add,
    /// `SUB rd, rs, rt`
    Sub,
    /// `AND rd, rs, rt`
    And,
    /// `OR rd, rs, rt`
    Or,
    /// `SLL rd, rt, shamt`
    Sll,
    /// `MULT rs, rt`
    Mult,
    /// `SLT rd, rs, rt`
    Slt,
    /// `ADDI rt, rs, imm`
    Addi,
    /// `SLTI rt, rs, imm`
    Slti,
    /// `LW rt, offset(base)`
    Lw,
    /// `SW rt, offset(base)`
    Sw,
    /// `LUI rt, imm`
    Lui,
    /// `BEQ rs, rt, label`
    Beq,
    /// `BNE rs, rt, label`
    Bne,
    /// `PRINT reg`
    Print,
    /// `PRINTS label`
    Prints,
    /// `EXIT`
    Exit,
    /// `HALT`
    Halt,
}

impl Mnemonic {
    /// Every supported mnemonic, in dispatch-table order.
    pub const ALL: [Self; 18] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Sll,
        Self::Mult,
        Self::Slt,
        Self::Addi,
        Self::Slti,
        Self::Lw,
        Self::Sw,
        Self::Lui,
        Self::Beq,
        Self::Bne,
        Self::Print,
        Self::Prints,
        Self::Exit,
        Self::Halt,
    ];

    /// Upper-case spelling of the mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Sll => "SLL",
            Self::Mult => "MULT",
            Self::Slt => "SLT",
            Self::Addi => "ADDI",
            Self::Slti => "SLTI",
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Lui => "LUI",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Print => "PRINT",
            Self::Prints => "PRINTS",
            Self::Exit => "EXIT",
            Self::Halt => "HALT",
        }
    }

    /// Number of operand tokens the mnemonic takes.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Add
            | Self::Sub
            | Self::And
            | Self::Or
            | Self::Sll
            | Self::Slt
            | Self::Addi
            | Self::Slti
            | Self::Lw
            | Self::Sw
            | Self::Beq
            | Self::Bne => 3,
            Self::Mult | Self::Lui => 2,
            Self::Print | Self::Prints => 1,
            Self::Exit | Self::Halt => 0,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mnemonic {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or(SimError::InvalidInstruction { mnemonic: upper })
    }
}

/// Broad instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Register/immediate arithmetic, logic, shifts and comparisons.
    Alu,
    /// `LW`.
    Load,
    /// `SW`.
    Store,
    /// `BEQ`/`BNE`.
    Branch,
    /// `PRINT`/`PRINTS`.
    Output,
    /// `EXIT`/`HALT`.
    Halt,
}

/// A decoded instruction with validated, typed operands.
///
/// Produced by [`decode`](crate::isa::decode::decode); label operands are kept
/// symbolic and resolved against the label table at execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = rs + rt`
    Add {
        /// Destination.
        rd: Register,
        /// First source.
        rs: Register,
        /// Second source.
        rt: Register,
    },
    /// `rd = rs - rt`
    Sub {
        /// Destination.
        rd: Register,
        /// First source.
        rs: Register,
        /// Second source.
        rt: Register,
    },
    /// `rd = rs & rt`
    And {
        /// Destination.
        rd: Register,
        /// First source.
        rs: Register,
        /// Second source.
        rt: Register,
    },
    /// `rd = rs | rt`
    Or {
        /// Destination.
        rd: Register,
        /// First source.
        rs: Register,
        /// Second source.
        rt: Register,
    },
    /// `rd = rt << shamt`
    Sll {
        /// Destination.
        rd: Register,
        /// Source.
        rt: Register,
        /// Shift amount.
        shamt: u32,
    },
    /// Product of `rs` and `rt` into the configured MULT destination.
    Mult {
        /// First factor.
        rs: Register,
        /// Second factor.
        rt: Register,
    },
    /// `rd = (rs < rt) ? 1 : 0`
    Slt {
        /// Destination.
        rd: Register,
        /// First source.
        rs: Register,
        /// Second source.
        rt: Register,
    },
    /// `rt = rs + imm`
    Addi {
        /// Destination.
        rt: Register,
        /// Source.
        rs: Register,
        /// Immediate.
        imm: i64,
    },
    /// `rt = (rs < imm) ? 1 : 0`
    Slti {
        /// Destination.
        rt: Register,
        /// Source.
        rs: Register,
        /// Immediate.
        imm: i64,
    },
    /// `rt = memory[base + offset]`
    Lw {
        /// Destination.
        rt: Register,
        /// Address offset.
        offset: i64,
        /// Base address register.
        base: Register,
    },
    /// `memory[base + offset] = rt`
    Sw {
        /// Value to store.
        rt: Register,
        /// Address offset.
        offset: i64,
        /// Base address register.
        base: Register,
    },
    /// `rt = imm << 16`
    Lui {
        /// Destination.
        rt: Register,
        /// Immediate.
        imm: i64,
    },
    /// Jump to `label` if `rs == rt`.
    Beq {
        /// First comparand.
        rs: Register,
        /// Second comparand.
        rt: Register,
        /// Target label.
        label: String,
    },
    /// Jump to `label` if `rs != rt`.
    Bne {
        /// First comparand.
        rs: Register,
        /// Second comparand.
        rt: Register,
        /// Target label.
        label: String,
    },
    /// Emit the value of `reg` to the output log.
    Print {
        /// Register to print.
        reg: Register,
    },
    /// Emit the string constant named `label` (or `label` itself).
    Prints {
        /// String constant name.
        label: String,
    },
    /// Stop the program.
    Halt,
}

impl Instruction {
    /// The canonical mnemonic of this instruction. `EXIT` decodes to [`Mnemonic::Halt`].
    pub const fn mnemonic(&self) -> Mnemonic {
        match self {
            Self::Add { .. } => Mnemonic::Add,
            Self::Sub { .. } => Mnemonic::Sub,
            Self::And { .. } => Mnemonic::And,
            Self::Or { .. } => Mnemonic::Or,
            Self::Sll { .. } => Mnemonic::Sll,
            Self::Mult { .. } => Mnemonic::Mult,
            Self::Slt { .. } => Mnemonic::Slt,
            Self::Addi { .. } => Mnemonic::Addi,
            Self::Slti { .. } => Mnemonic::Slti,
            Self::Lw { .. } => Mnemonic::Lw,
            Self::Sw { .. } => Mnemonic::Sw,
            Self::Lui { .. } => Mnemonic::Lui,
            Self::Beq { .. } => Mnemonic::Beq,
            Self::Bne { .. } => Mnemonic::Bne,
            Self::Print { .. } => Mnemonic::Print,
            Self::Prints { .. } => Mnemonic::Prints,
            Self::Halt => Mnemonic::Halt,
        }
    }

    /// Category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Lw { .. } => InstructionClass::Load,
            Self::Sw { .. } => InstructionClass::Store,
            Self::Beq { .. } | Self::Bne { .. } => InstructionClass::Branch,
            Self::Print { .. } | Self::Prints { .. } => InstructionClass::Output,
            Self::Halt => InstructionClass::Halt,
            _ => InstructionClass::Alu,
        }
    }
}
