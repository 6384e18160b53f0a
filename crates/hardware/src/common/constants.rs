//! Global Simulator Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Syntax Constants:** Comment, label and directive markers of the assembly format.
//! 2. **Architectural Constants:** Fixed shift amounts and the default MULT target.

/// Starts a line comment; everything from here to end of line is discarded.
pub const COMMENT_MARKER: char = '#';

/// Separates a label name from the (optional) instruction sharing its line.
pub const LABEL_SEPARATOR: char = ':';

/// Directive registering a named string constant for `PRINTS`.
pub const DATA_DIRECTIVE: &str = ".data";

/// Quote character stripped from `.data` literal text.
pub const STRING_QUOTE: char = '"';

/// Characters separating the mnemonic and operands of an instruction.
///
/// Parentheses are separators so that `4($sp)` tokenizes as `4`, `$sp`.
pub const OPERAND_SEPARATORS: [char; 3] = [',', '(', ')'];

/// Left shift applied to the immediate of `LUI`.
pub const LUI_SHIFT: u32 = 16;

/// Register receiving the product of `MULT` unless configured otherwise.
pub const DEFAULT_MULT_DESTINATION: &str = "$t0";

/// Width in bits of every encoded instruction.
pub const INSTRUCTION_BITS: usize = 32;
