//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, which holds the architectural state
//! an executing program can observe and change:
//! 1. **Registers:** The 32-entry general-purpose register bank.
//! 2. **Memory:** The sparse data memory addressed by loads and stores.
//! 3. **Program Counter:** Index of the next instruction in the loaded program.

/// Instruction execution and program-counter control.
pub mod execution;

use crate::common::{Register, Result};
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::soc::Memory;

pub use execution::{Flow, Retired};

/// Architectural CPU state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Data memory.
    pub memory: Memory,
    /// Index of the next instruction to execute.
    pub pc: usize,
    /// Register receiving the product of `MULT`.
    pub mult_destination: Register,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::with_mult_destination(Register::T0)
    }
}

impl Cpu {
    /// Creates a CPU configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// if the configured MULT destination is not a register name.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_mult_destination(
            config.cpu.mult_destination_register()?,
        ))
    }

    /// Creates a CPU with zeroed state and the given MULT destination.
    pub const fn with_mult_destination(mult_destination: Register) -> Self {
        Self {
            regs: Gpr::new(),
            memory: Memory::new(),
            pc: 0,
            mult_destination,
        }
    }

    /// Clears registers and memory and rewinds the PC. Configuration is kept.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.memory.clear();
        self.pc = 0;
    }
}
