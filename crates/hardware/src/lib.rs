//! MIPS teaching simulator library.
//!
//! This crate implements an instruction-level simulator for a small MIPS subset with the following:
//! 1. **Loader:** Assembles source lines into instructions, labels and `.data` strings.
//! 2. **ISA:** Decoding to typed instructions, 32-bit binary encoding and disassembly.
//! 3. **Core:** 32 general-purpose registers, PC and instruction execution.
//! 4. **Memory:** Sparse word-addressed data memory where unwritten addresses read as zero.
//! 5. **Simulation:** Stepping, bounded and unbounded runs, output log, binary trace and statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::Simulator;
//!
//! let mut sim = Simulator::new();
//! sim.load(["addi $t0, $zero, 5", "addi $t1, $zero, 7", "add $t2, $t0, $t1", "print $t2"]);
//! sim.run().unwrap();
//!
//! assert_eq!(sim.register("$t2").unwrap(), 12);
//! assert_eq!(sim.output(), ["12"]);
//! assert_eq!(sim.trace()[2], "00000001000010010101000000100000");
//! ```

/// Common types and constants (registers, errors, syntax markers).
pub mod common;
/// Simulator configuration (general and CPU sections, JSON loading).
pub mod config;
/// CPU core (register file, PC, execution).
pub mod core;
/// Instruction set (decode, instruction, encoding, disassembly, ABI names).
pub mod isa;
/// Program loader, simulator facade and state snapshots.
pub mod sim;
/// Data memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type shared by decoding and execution.
pub use crate::common::{Register, SimError};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and PC.
pub use crate::core::Cpu;
/// Typed instruction and its encoding.
pub use crate::isa::{Encoding, Instruction};
/// Top-level simulator; construct with `Simulator::new` and feed it with `load`.
pub use crate::sim::{Program, Simulator, Snapshot, StepOutcome};
