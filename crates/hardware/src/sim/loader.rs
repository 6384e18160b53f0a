//! Assembler and Program Loader.
//!
//! This module turns assembly source lines into a [`Program`]. It performs:
//! 1. **Normalization:** Trims each line, drops `#` comments and skips blank lines.
//! 2. **Directives:** `.data name "text"` registers a string constant for `PRINTS`.
//! 3. **Labels:** `name:` binds `name` to the index of the next instruction; an
//!    instruction may follow the colon on the same line.
//!
//! Loading is a single forward pass. Branch targets stay symbolic and are looked
//! up when the branch executes, so forward and backward references behave alike.

use std::collections::BTreeMap;

use tracing::warn;

use crate::common::constants::{COMMENT_MARKER, DATA_DIRECTIVE, LABEL_SEPARATOR, STRING_QUOTE};

/// A loaded program: instruction text plus its symbol tables.
///
/// Immutable once assembled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<String>,
    labels: BTreeMap<String, usize>,
    strings: BTreeMap<String, String>,
}

impl Program {
    /// Assembles source lines into a program.
    ///
    /// Never fails: malformed instructions are kept verbatim and reported when
    /// they execute. A `.data` line with fewer than three tokens is ignored.
    pub fn assemble<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut program = Self::default();
        for (line_no, raw) in lines.into_iter().enumerate() {
            let line = strip_comment(raw.as_ref());
            if line.is_empty() {
                continue;
            }

            if line.starts_with(DATA_DIRECTIVE) {
                program.define_string(line_no + 1, line);
                continue;
            }

            if let Some((label, rest)) = line.split_once(LABEL_SEPARATOR) {
                let label = label.trim();
                let target = program.instructions.len();
                if program.labels.insert(label.to_string(), target).is_some() {
                    warn!(line = line_no + 1, label, "label redefined; later definition wins");
                }
                let rest = rest.trim();
                if !rest.is_empty() {
                    program.instructions.push(rest.to_string());
                }
            } else {
                program.instructions.push(line.to_string());
            }
        }
        program
    }

    /// Assembles a whole source text, one instruction per line.
    pub fn from_source(source: &str) -> Self {
        Self::assemble(source.lines())
    }

    fn define_string(&mut self, line_no: usize, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [_, name, text @ ..] if !text.is_empty() => {
                let literal = text.join(" ").replace(STRING_QUOTE, "");
                let _ = self.strings.insert((*name).to_string(), literal);
            }
            _ => warn!(line = line_no, directive = line, "ignoring incomplete .data directive"),
        }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction text at `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.instructions.get(idx).map(String::as_str)
    }

    /// Instruction index bound to `name`.
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// String constant registered under `name` by `.data`.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Label table.
    pub const fn labels(&self) -> &BTreeMap<String, usize> {
        &self.labels
    }

    /// String constant table.
    pub const fn strings(&self) -> &BTreeMap<String, String> {
        &self.strings
    }
}

/// Trims a line and cuts it at the first comment marker.
fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    line.split_once(COMMENT_MARKER)
        .map_or(line, |(code, _)| code)
        .trim()
}
