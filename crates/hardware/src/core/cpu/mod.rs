//! CPU Core Definition.
//!
//! This module defines the `Cpu` structure, the architectural state of the
//! machine:
//! 1. **Program Counter:** Word address of the next instruction.
//! 2. **Registers:** The eight general-purpose registers.
//! 3. **Run State:** Whether the machine is still running.
//!
//! Memory is not part of the CPU. Every fetch, load, and store is issued to
//! the [`MemoryHierarchy`](crate::soc::memory::controller::MemoryHierarchy)
//! passed into [`Cpu::step`].

/// Fetch-decode-execute loop.
pub mod execution;

use std::fmt::Write as _;

use crate::common::Word;
use crate::core::arch::Gpr;
use crate::soc::memory::controller::MemoryHierarchy;

/// Whether the machine is executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// A halt instruction was fetched; terminal.
    Halted,
}

/// Architectural processor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter (word address).
    pub pc: Word,
    /// Run state.
    pub state: RunState,
}

impl Cpu {
    /// Creates a CPU at `pc = 0` with zeroed registers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a halt has been executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Formats the architectural state: pc, the loaded memory image, and registers.
    ///
    /// Memory words are shown as the program sees them, so values still dirty
    /// in the cache appear with their cached contents.
    pub fn dump_state(&self, mem: &MemoryHierarchy) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n@@@\nstate:");
        let _ = writeln!(out, "\tpc {}", self.pc);
        let _ = writeln!(out, "\tmemory:");
        for addr in 0..mem.memory().loaded_words() {
            let addr = addr as Word;
            let value = mem.peek(addr).unwrap_or_default();
            let _ = writeln!(out, "\t\tmem[{addr}]={value}");
        }
        let _ = writeln!(out, "\tregisters:");
        let _ = write!(out, "{}", self.regs);
        let _ = write!(out, "end state");
        out
    }
}
