//! Data Memory.
//!
//! This module implements the simulated data memory. It provides:
//! 1. **Storage:** A sparse map from word address to value; only stored words take space.
//! 2. **Default-zero reads:** An address never stored to reads as 0.
//! 3. **Observability:** Ordered snapshots and a textual dump for drivers.
//!
//! Addresses are effective addresses (`base + offset`) with no alignment or
//! bounds checks: memory behaves as an unbounded array of words.

use std::collections::BTreeMap;
use std::fmt;

/// Sparse word-addressable data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<i64, i64>,
}

impl Memory {
    /// Creates an empty memory; every address reads as 0.
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    pub fn load(&self, addr: i64) -> i64 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `value` at `addr`, replacing any previous value.
    pub fn store(&mut self, addr: i64, value: i64) {
        let _ = self.words.insert(addr, value);
    }

    /// Number of addresses that have been written.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over written words in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.words.iter().map(|(addr, value)| (*addr, *value))
    }

    /// Copy of all written words, keyed by address.
    pub fn snapshot(&self) -> BTreeMap<i64, i64> {
        self.words.clone()
    }

    /// Forgets every stored word.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl fmt::Display for Memory {
    /// One `[0x%08x]: value` line per written word, ascending by address.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (addr, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{addr:#010x}]: {value}")?;
        }
        Ok(())
    }
}
