//! Instruction Disassembler.
//!
//! Renders a decoded [`Instruction`] back to canonical assembly text for trace
//! logs, CLI output and test diagnostics. The output always decodes back to an
//! equal instruction.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::decode::decode;
//! let inst = decode("LW $t1,4($zero)").unwrap();
//! assert_eq!(inst.to_string(), "lw $t1, 4($zero)");
//! ```

use std::fmt;

use crate::isa::instruction::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mn = self.mnemonic().as_str().to_ascii_lowercase();
        match self {
            Self::Add { rd, rs, rt }
            | Self::Sub { rd, rs, rt }
            | Self::And { rd, rs, rt }
            | Self::Or { rd, rs, rt }
            | Self::Slt { rd, rs, rt } => write!(f, "{mn} {rd}, {rs}, {rt}"),
            Self::Sll { rd, rt, shamt } => write!(f, "{mn} {rd}, {rt}, {shamt}"),
            Self::Mult { rs, rt } => write!(f, "{mn} {rs}, {rt}"),
            Self::Addi { rt, rs, imm } | Self::Slti { rt, rs, imm } => {
                write!(f, "{mn} {rt}, {rs}, {imm}")
            }
            Self::Lw { rt, offset, base } | Self::Sw { rt, offset, base } => {
                write!(f, "{mn} {rt}, {offset}({base})")
            }
            Self::Lui { rt, imm } => write!(f, "{mn} {rt}, {imm}"),
            Self::Beq { rs, rt, label } | Self::Bne { rs, rt, label } => {
                write!(f, "{mn} {rs}, {rt}, {label}")
            }
            Self::Print { reg } => write!(f, "{mn} {reg}"),
            Self::Prints { label } => write!(f, "{mn} {label}"),
            Self::Halt => f.write_str(&mn),
        }
    }
}
