//! MIPS Instruction Decoder.
//!
//! This module turns one line of normalized instruction text into a typed
//! [`Instruction`]. It performs the following:
//! 1. **Tokenization:** Splits on any mix of commas, whitespace and parentheses,
//!    so `LW $t0, 4($sp)` and `LW $t0, 4, $sp` read the same.
//! 2. **Dispatch:** Matches the mnemonic case-insensitively against the subset.
//! 3. **Validation:** Checks the operand count, then parses every register and
//!    immediate once, so execution never sees an unvalidated operand.

use crate::common::constants::OPERAND_SEPARATORS;
use crate::common::{Register, Result, SimError};
use crate::isa::instruction::{Instruction, Mnemonic};

/// Splits instruction text into mnemonic and operand tokens.
///
/// Empty fragments between consecutive separators are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || OPERAND_SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Decodes one instruction line.
///
/// # Errors
///
/// * [`SimError::InvalidInstruction`] - the mnemonic is not supported (or the
///   line is blank).
/// * [`SimError::MalformedOperands`] - the operand count does not match.
/// * [`SimError::UnknownRegister`] - a register operand is not a register name.
/// * [`SimError::InvalidImmediate`] - an integer operand does not parse.
pub fn decode(text: &str) -> Result<Instruction> {
    let tokens = tokenize(text);
    let Some((head, rest)) = tokens.split_first() else {
        return Err(SimError::InvalidInstruction {
            mnemonic: String::new(),
        });
    };
    let mnemonic: Mnemonic = head.parse()?;
    let ops = Operands::new(mnemonic, rest)?;

    Ok(match mnemonic {
        Mnemonic::Add => Instruction::Add {
            rd: ops.reg(0)?,
            rs: ops.reg(1)?,
            rt: ops.reg(2)?,
        },
        Mnemonic::Sub => Instruction::Sub {
            rd: ops.reg(0)?,
            rs: ops.reg(1)?,
            rt: ops.reg(2)?,
        },
        Mnemonic::And => Instruction::And {
            rd: ops.reg(0)?,
            rs: ops.reg(1)?,
            rt: ops.reg(2)?,
        },
        Mnemonic::Or => Instruction::Or {
            rd: ops.reg(0)?,
            rs: ops.reg(1)?,
            rt: ops.reg(2)?,
        },
        Mnemonic::Slt => Instruction::Slt {
            rd: ops.reg(0)?,
            rs: ops.reg(1)?,
            rt: ops.reg(2)?,
        },
        Mnemonic::Sll => Instruction::Sll {
            rd: ops.reg(0)?,
            rt: ops.reg(1)?,
            shamt: ops.shamt(2)?,
        },
        Mnemonic::Mult => Instruction::Mult {
            rs: ops.reg(0)?,
            rt: ops.reg(1)?,
        },
        Mnemonic::Addi => Instruction::Addi {
            rt: ops.reg(0)?,
            rs: ops.reg(1)?,
            imm: ops.imm(2)?,
        },
        Mnemonic::Slti => Instruction::Slti {
            rt: ops.reg(0)?,
            rs: ops.reg(1)?,
            imm: ops.imm(2)?,
        },
        Mnemonic::Lw => Instruction::Lw {
            rt: ops.reg(0)?,
            offset: ops.imm(1)?,
            base: ops.reg(2)?,
        },
        Mnemonic::Sw => Instruction::Sw {
            rt: ops.reg(0)?,
            offset: ops.imm(1)?,
            base: ops.reg(2)?,
        },
        Mnemonic::Lui => Instruction::Lui {
            rt: ops.reg(0)?,
            imm: ops.imm(1)?,
        },
        Mnemonic::Beq => Instruction::Beq {
            rs: ops.reg(0)?,
            rt: ops.reg(1)?,
            label: ops.label(2),
        },
        Mnemonic::Bne => Instruction::Bne {
            rs: ops.reg(0)?,
            rt: ops.reg(1)?,
            label: ops.label(2),
        },
        Mnemonic::Print => Instruction::Print { reg: ops.reg(0)? },
        Mnemonic::Prints => Instruction::Prints { label: ops.label(0) },
        Mnemonic::Exit | Mnemonic::Halt => Instruction::Halt,
    })
}

/// Parses an integer literal: optional sign, then decimal or `0x` hex digits.
///
/// # Errors
///
/// Returns [`SimError::InvalidImmediate`] carrying the original token.
pub fn parse_immediate(token: &str) -> Result<i64> {
    let invalid = || SimError::InvalidImmediate(token.to_string());
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if !hex.starts_with(['+', '-']) => i64::from_str_radix(hex, 16),
        Some(_) => return Err(invalid()),
        None => digits.parse::<i64>(),
    }
    .map_err(|_| invalid())?;
    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Operand tokens of one instruction, already checked for count.
struct Operands<'a> {
    tokens: &'a [&'a str],
}

impl<'a> Operands<'a> {
    fn new(mnemonic: Mnemonic, tokens: &'a [&'a str]) -> Result<Self> {
        let expected = mnemonic.operand_count();
        if tokens.len() != expected {
            return Err(SimError::MalformedOperands {
                mnemonic: mnemonic.as_str().to_string(),
                expected,
                found: tokens.len(),
            });
        }
        Ok(Self { tokens })
    }

    /// Index is always below the count checked in `new`.
    fn token(&self, idx: usize) -> &'a str {
        self.tokens[idx]
    }

    fn reg(&self, idx: usize) -> Result<Register> {
        Register::from_name(self.token(idx))
    }

    fn imm(&self, idx: usize) -> Result<i64> {
        parse_immediate(self.token(idx))
    }

    fn shamt(&self, idx: usize) -> Result<u32> {
        let token = self.token(idx);
        let value = parse_immediate(token)?;
        u32::try_from(value).map_err(|_| SimError::InvalidImmediate(token.to_string()))
    }

    fn label(&self, idx: usize) -> String {
        self.token(idx).to_string()
    }
}
