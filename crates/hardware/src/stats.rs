//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the MIPS simulator. It provides:
//! 1. **Retirement:** Total instructions executed since load or reset.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, output, halt).
//! 3. **Branches:** Taken and not-taken counts for conditional branches.

use serde::Serialize;

use crate::core::cpu::Flow;
use crate::isa::InstructionClass;

/// Simulation statistics tracking executed-instruction metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions executed (retired).
    pub instructions_retired: u64,

    /// Count of ALU (arithmetic, logic, shift, compare, LUI) instructions retired.
    pub inst_alu: u64,
    /// Count of `LW` instructions retired.
    pub inst_load: u64,
    /// Count of `SW` instructions retired.
    pub inst_store: u64,
    /// Count of `BEQ`/`BNE` instructions retired.
    pub inst_branch: u64,
    /// Count of `PRINT`/`PRINTS` instructions retired.
    pub inst_output: u64,
    /// Count of `EXIT`/`HALT` instructions retired.
    pub inst_halt: u64,

    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Records one retired instruction.
    pub const fn record(&mut self, class: InstructionClass, flow: Flow) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Output => self.inst_output += 1,
            InstructionClass::Halt => self.inst_halt += 1,
            InstructionClass::Branch => {
                self.inst_branch += 1;
                match flow {
                    Flow::Jump(_) => self.branches_taken += 1,
                    Flow::Next => self.branches_not_taken += 1,
                }
            }
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        if want("summary") {
            println!("\n==========================================================");
            println!("MIPS SIMULATION STATISTICS");
            println!("==========================================================");
            println!("sim_insts                {}", self.instructions_retired);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
            println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
            println!("  op.output              {} ({:.2}%)", self.inst_output, pct(self.inst_output));
            println!("  op.halt                {} ({:.2}%)", self.inst_halt, pct(self.inst_halt));
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let total = self.branches_taken + self.branches_not_taken;
            let taken_rate = if total > 0 {
                100.0 * (self.branches_taken as f64 / total as f64)
            } else {
                0.0
            };
            println!("BRANCHES");
            println!("  br.total               {total}");
            println!("  br.taken               {}", self.branches_taken);
            println!("  br.not_taken           {}", self.branches_not_taken);
            println!("  br.taken_rate          {taken_rate:.2}%");
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
