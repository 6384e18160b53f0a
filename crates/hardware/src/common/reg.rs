//! Register Identifiers.
//!
//! Registers appear by name in assembly source (`$t0`, `$sp`) and by number in
//! binary encodings. `Register` holds the canonical number and converts in both
//! directions:
//! 1. **Parsing:** Maps an assembly name to a register, rejecting anything else.
//! 2. **Encoding:** Exposes the 5-bit index used by the binary encoder.
//! 3. **Display:** Renders the canonical name for dumps and disassembly.

use std::fmt;
use std::str::FromStr;

use super::error::SimError;
use crate::isa::abi::{REG_NAMES, REG_RA, REG_SP, REG_T0, REG_ZERO};

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = REG_NAMES.len();

/// A general-purpose register, identified by its canonical number (0-31).
///
/// Only the 32 names in [`REG_NAMES`] can be turned into a `Register`, so every
/// value of this type is a valid index into the register bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// `$zero`, hardwired to zero.
    pub const ZERO: Self = Self(REG_ZERO as u8);
    /// `$t0`.
    pub const T0: Self = Self(REG_T0 as u8);
    /// `$sp`.
    pub const SP: Self = Self(REG_SP as u8);
    /// `$ra`.
    pub const RA: Self = Self(REG_RA as u8);

    /// Returns the register with the given number, if it is in range.
    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < REGISTER_COUNT).then_some(Self(idx as u8))
    }

    /// Looks up a register by its assembly name.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`] if `name` is not one of the 32
    /// canonical names.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        REG_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| Self(idx as u8))
            .ok_or_else(|| SimError::UnknownRegister(name.to_string()))
    }

    /// Canonical register number, as placed in 5-bit encoding fields.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical assembly name.
    pub const fn name(self) -> &'static str {
        REG_NAMES[self.index()]
    }

    /// Whether this is the hardwired zero register.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == Self::ZERO.0
    }

    /// Iterates over all registers in encoding order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..REGISTER_COUNT).map(|idx| Self(idx as u8))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
