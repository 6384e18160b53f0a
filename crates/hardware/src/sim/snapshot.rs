//! Serializable views of simulator state.
//!
//! Drivers render these after each step (text dumps) or export them as JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::common::Register;
use crate::core::arch::gpr::Gpr;
use crate::stats::SimStats;

/// All 32 register values in encoding order.
///
/// Serializes as a JSON object keyed by register name, in encoding order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterSnapshot(Vec<(Register, i64)>);

impl RegisterSnapshot {
    /// Captures the current values of `regs`.
    pub fn capture(regs: &Gpr) -> Self {
        Self(regs.iter().collect())
    }

    /// Value of the register named `name`, if it is a register.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|(reg, _)| reg.name() == name)
            .map(|(_, value)| *value)
    }

    /// Iterates over `(register, value)` pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, i64)> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for RegisterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(reg, value)| (reg.name(), value)))
    }
}

impl fmt::Display for RegisterSnapshot {
    /// One `name: value` line per register.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (reg, value)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{reg}: {value}")?;
        }
        Ok(())
    }
}

/// Complete observable state after a step or run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    /// Index of the next instruction.
    pub pc: usize,
    /// Whether the PC is past the last instruction.
    pub finished: bool,
    /// Register values.
    pub registers: RegisterSnapshot,
    /// Written memory words, keyed by address.
    pub memory: BTreeMap<i64, i64>,
    /// Lines emitted by `PRINT`/`PRINTS`.
    pub output: Vec<String>,
    /// Binary encoding of every executed instruction, in order.
    pub trace: Vec<String>,
    /// Execution statistics.
    pub stats: SimStats,
}
