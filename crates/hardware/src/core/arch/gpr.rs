//! General-Purpose Register File.
//!
//! Eight word-sized registers, all writable, reset to zero.

use std::fmt;

use crate::common::{NUM_REGS, Word};

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [Word; NUM_REGS],
}

impl Gpr {
    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= NUM_REGS`. Decoded register fields are three bits wide
    /// and always in range.
    pub const fn read(&self, idx: usize) -> Word {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= NUM_REGS`.
    pub fn write(&mut self, idx: usize, val: Word) {
        self.regs[idx] = val;
    }

    /// All registers in index order.
    pub const fn as_array(&self) -> &[Word; NUM_REGS] {
        &self.regs
    }
}

impl fmt::Display for Gpr {
    /// One `reg[i]=value` line per register, tab-indented for the state dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            writeln!(f, "\t\treg[{i}]={val}")?;
        }
        Ok(())
    }
}
