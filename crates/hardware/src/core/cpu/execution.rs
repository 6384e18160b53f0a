//! Instruction Execution.
//!
//! This module applies one decoded instruction to the CPU state. It performs the following:
//! 1. **Semantics:** Arithmetic, logic, shifts, comparisons, loads and stores.
//! 2. **Control Flow:** Resolves branch labels and reports where the PC goes next.
//! 3. **Output:** Produces the text emitted by `PRINT`/`PRINTS`.
//!
//! Every handler computes its result before touching state, so a failing
//! instruction leaves registers, memory and PC exactly as they were.

use super::Cpu;
use crate::common::constants::LUI_SHIFT;
use crate::common::{Register, Result, SimError};
use crate::isa::Instruction;
use crate::sim::loader::Program;

/// Where the PC goes after an instruction retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance to the following instruction.
    Next,
    /// Continue at the given instruction index (taken branch or halt).
    Jump(usize),
}

/// Effects of one retired instruction beyond register and memory writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Retired {
    /// PC control decision.
    pub flow: Flow,
    /// Line appended to the output log, if any.
    pub output: Option<String>,
}

impl Retired {
    const fn next() -> Self {
        Self {
            flow: Flow::Next,
            output: None,
        }
    }

    const fn flow(flow: Flow) -> Self {
        Self { flow, output: None }
    }

    const fn print(line: String) -> Self {
        Self {
            flow: Flow::Next,
            output: Some(line),
        }
    }
}

impl Cpu {
    /// Executes `inst` against this CPU. The PC is not modified; apply the
    /// returned [`Flow`] with [`Cpu::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownLabel`] if a branch names a label the program
    /// does not define. The label is checked whether or not the branch is taken.
    pub fn execute(&mut self, inst: &Instruction, program: &Program) -> Result<Retired> {
        use Instruction as I;
        Ok(match inst {
            I::Add { rd, rs, rt } => self.binary(*rd, *rs, *rt, i64::wrapping_add),
            I::Sub { rd, rs, rt } => self.binary(*rd, *rs, *rt, i64::wrapping_sub),
            I::And { rd, rs, rt } => self.binary(*rd, *rs, *rt, |a, b| a & b),
            I::Or { rd, rs, rt } => self.binary(*rd, *rs, *rt, |a, b| a | b),
            I::Slt { rd, rs, rt } => self.binary(*rd, *rs, *rt, |a, b| i64::from(a < b)),
            I::Sll { rd, rt, shamt } => {
                let value = self.regs.read(*rt).checked_shl(*shamt).unwrap_or(0);
                self.regs.write(*rd, value);
                Retired::next()
            }
            I::Mult { rs, rt } => {
                let product = self.regs.read(*rs).wrapping_mul(self.regs.read(*rt));
                self.regs.write(self.mult_destination, product);
                Retired::next()
            }

            I::Addi { rt, rs, imm } => {
                let value = self.regs.read(*rs).wrapping_add(*imm);
                self.regs.write(*rt, value);
                Retired::next()
            }
            I::Slti { rt, rs, imm } => {
                let value = i64::from(self.regs.read(*rs) < *imm);
                self.regs.write(*rt, value);
                Retired::next()
            }
            I::Lw { rt, offset, base } => {
                let value = self.memory.load(self.effective_address(*base, *offset));
                self.regs.write(*rt, value);
                Retired::next()
            }
            I::Sw { rt, offset, base } => {
                let addr = self.effective_address(*base, *offset);
                self.memory.store(addr, self.regs.read(*rt));
                Retired::next()
            }
            I::Lui { rt, imm } => {
                self.regs.write(*rt, imm.wrapping_shl(LUI_SHIFT));
                Retired::next()
            }

            I::Beq { rs, rt, label } => {
                let taken = self.regs.read(*rs) == self.regs.read(*rt);
                Retired::flow(branch(program, label, taken)?)
            }
            I::Bne { rs, rt, label } => {
                let taken = self.regs.read(*rs) != self.regs.read(*rt);
                Retired::flow(branch(program, label, taken)?)
            }

            I::Print { reg } => Retired::print(self.regs.read(*reg).to_string()),
            I::Prints { label } => {
                Retired::print(program.string(label).unwrap_or(label.as_str()).to_string())
            }
            I::Halt => Retired::flow(Flow::Jump(program.len())),
        })
    }

    /// Moves the PC according to `flow`.
    #[inline]
    pub const fn advance(&mut self, flow: Flow) {
        self.pc = match flow {
            Flow::Next => self.pc + 1,
            Flow::Jump(target) => target,
        };
    }

    fn binary(
        &mut self,
        rd: Register,
        rs: Register,
        rt: Register,
        op: impl FnOnce(i64, i64) -> i64,
    ) -> Retired {
        let value = op(self.regs.read(rs), self.regs.read(rt));
        self.regs.write(rd, value);
        Retired::next()
    }

    const fn effective_address(&self, base: Register, offset: i64) -> i64 {
        self.regs.read(base).wrapping_add(offset)
    }
}

fn branch(program: &Program, label: &str, taken: bool) -> Result<Flow> {
    let target = program
        .label(label)
        .ok_or_else(|| SimError::UnknownLabel(label.to_string()))?;
    Ok(if taken { Flow::Jump(target) } else { Flow::Next })
}
