//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides the building blocks shared by the loader, the CPU and
//! the encoder. It includes:
//! 1. **Constants:** Assembly syntax markers and architectural fixed values.
//! 2. **Error Handling:** The error taxonomy raised while decoding and executing.
//! 3. **Register Identifiers:** The named register type used by every operand.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types raised by decode and execution.
pub mod error;

/// Register identifiers.
pub mod reg;

pub use error::{Result, SimError};
pub use reg::Register;
