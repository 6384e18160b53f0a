//! Simulation error definitions.
//!
//! Every failure the engine can report is one of the variants below. They are
//! raised synchronously by decode or execution of the offending instruction and
//! propagate out of `step`/`run` unchanged:
//! 1. **Decode errors:** unknown mnemonic, wrong operand count, bad register or immediate.
//! 2. **Execution errors:** a branch naming a label the program never defined.

use thiserror::Error;

/// Error raised while decoding or executing an instruction.
///
/// State committed by previously executed instructions is never rolled back;
/// the failing instruction itself applies no effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The mnemonic is not part of the supported instruction subset.
    #[error("unrecognized instruction: {mnemonic}")]
    InvalidInstruction {
        /// The offending mnemonic, upper-cased as it was matched.
        mnemonic: String,
    },

    /// The mnemonic is known but its operand list has the wrong length.
    #[error("malformed operands for {mnemonic}: expected {expected}, found {found}")]
    MalformedOperands {
        /// The mnemonic whose operands were malformed.
        mnemonic: String,
        /// Number of operands the mnemonic takes.
        expected: usize,
        /// Number of operand tokens present.
        found: usize,
    },

    /// A branch names a label absent from the label table.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// An operand is not one of the 32 register names.
    #[error("unknown register: {0}")]
    UnknownRegister(String),

    /// An operand expected to be an integer literal is not one.
    #[error("invalid immediate: {0}")]
    InvalidImmediate(String),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, SimError>;
