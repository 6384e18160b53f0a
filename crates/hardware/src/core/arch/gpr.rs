//! MIPS General-Purpose Register Bank.
//!
//! This module implements the register bank of the simulated CPU.
//! It performs the following:
//! 1. **Storage:** Maintains the 32 integer registers (`$zero`-`$ra`).
//! 2. **Invariant Enforcement:** Ensures that `$zero` always reads 0; writes to it are dropped.
//! 3. **Name Access:** Reads and writes by assembly name for drivers and tests.
//! 4. **Debugging:** Provides a `name: value` dump of the complete register state.

use std::fmt;

use crate::common::reg::REGISTER_COUNT;
use crate::common::{Register, Result};

/// General-purpose register bank.
///
/// Values are unclamped signed integers; no 32-bit truncation happens at the
/// register level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [i64; REGISTER_COUNT],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register bank with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register. `$zero` always returns 0.
    #[inline]
    pub const fn read(&self, reg: Register) -> i64 {
        if reg.is_zero() { 0 } else { self.regs[reg.index()] }
    }

    /// Writes a register. Writes to `$zero` are silently discarded.
    #[inline]
    pub const fn write(&mut self, reg: Register, val: i64) {
        if !reg.is_zero() {
            self.regs[reg.index()] = val;
        }
    }

    /// Reads a register by assembly name.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// for a name outside the 32 canonical ones.
    pub fn read_named(&self, name: &str) -> Result<i64> {
        Ok(self.read(Register::from_name(name)?))
    }

    /// Writes a register by assembly name.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// for a name outside the 32 canonical ones.
    pub fn write_named(&mut self, name: &str, val: i64) -> Result<()> {
        self.write(Register::from_name(name)?, val);
        Ok(())
    }

    /// Iterates over every register and its value in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, i64)> + '_ {
        Register::all().map(|reg| (reg, self.read(reg)))
    }

    /// Resets every register to zero.
    pub const fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }
}

impl fmt::Display for Gpr {
    /// One `name: value` line per register, in encoding order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (reg, value) in self.iter() {
            if !reg.is_zero() {
                writeln!(f)?;
            }
            write!(f, "{reg}: {value}")?;
        }
        Ok(())
    }
}
