//! Simulation driver and program loading.
//!
//! Provides the assembler that turns source lines into a program, the
//! `Simulator` that executes it step by step, and serializable snapshots of
//! the resulting state.

/// Assembler: source lines to program.
pub mod loader;
/// Simulator facade: load, step, run, observe.
pub mod simulator;
/// Serializable state views.
pub mod snapshot;

pub use loader::Program;
pub use simulator::{Simulator, StepOutcome};
pub use snapshot::{RegisterSnapshot, Snapshot};
