//! Main Execution Loop.
//!
//! One call to [`Cpu::step`] runs one instruction:
//! 1. **Fetch:** Read the word at `pc` through the memory hierarchy.
//! 2. **Halt check:** A halt stops the machine before any other state changes.
//! 3. **Advance:** `pc += 1`; branch and jump targets are relative to the advanced pc.
//! 4. **Execute:** Dispatch on the decoded instruction. Loads and stores go
//!    through the memory hierarchy like fetches do.

use tracing::{info, trace};

use super::{Cpu, RunState};
use crate::common::{MemOp, SimError, Word};
use crate::isa::{Instruction, decode};
use crate::sim::trace::TraceSink;
use crate::soc::memory::controller::MemoryHierarchy;

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The executed instruction (a fetched halt included), or `None` if the
    /// machine had already halted and nothing was done.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] when the fetch, load, or store address
    /// is outside memory. The pc and registers are left as they were at the
    /// faulting access.
    pub fn step(
        &mut self,
        mem: &mut MemoryHierarchy,
        sink: &mut dyn TraceSink,
    ) -> Result<Option<Instruction>, SimError> {
        if self.is_halted() {
            return Ok(None);
        }

        let word = Self::access(mem, sink, self.pc, MemOp::Read)?;
        let inst = decode(word);
        trace!(pc = self.pc, %inst, "execute");

        if inst == Instruction::Halt {
            self.state = RunState::Halted;
            info!(pc = self.pc, "machine halted");
            return Ok(Some(inst));
        }

        self.pc = self.pc.wrapping_add(1);
        self.execute(inst, mem, sink)?;
        Ok(Some(inst))
    }

    /// Applies a decoded instruction to the architectural state. `pc` has already advanced.
    fn execute(
        &mut self,
        inst: Instruction,
        mem: &mut MemoryHierarchy,
        sink: &mut dyn TraceSink,
    ) -> Result<(), SimError> {
        match inst {
            Instruction::Add { reg_a, reg_b, dest } => {
                let val = self.regs.read(reg_a).wrapping_add(self.regs.read(reg_b));
                self.regs.write(dest, val);
            }
            Instruction::Nand { reg_a, reg_b, dest } => {
                let val = !(self.regs.read(reg_a) & self.regs.read(reg_b));
                self.regs.write(dest, val);
            }
            Instruction::Lw {
                reg_a,
                reg_b,
                offset,
            } => {
                let addr = self.regs.read(reg_b).wrapping_add(offset);
                let val = Self::access(mem, sink, addr, MemOp::Read)?;
                self.regs.write(reg_a, val);
            }
            Instruction::Sw {
                reg_a,
                reg_b,
                offset,
            } => {
                let addr = self.regs.read(reg_b).wrapping_add(offset);
                let _ = Self::access(mem, sink, addr, MemOp::Write(self.regs.read(reg_a)))?;
            }
            Instruction::Beq {
                reg_a,
                reg_b,
                offset,
            } => {
                if self.regs.read(reg_a) == self.regs.read(reg_b) {
                    self.pc = self.pc.wrapping_add(offset);
                }
            }
            Instruction::Jalr { reg_a, reg_b } => {
                if reg_a != reg_b {
                    self.regs.write(reg_a, self.pc);
                    self.pc = self.regs.read(reg_b);
                }
            }
            Instruction::Noop | Instruction::Data(_) => {}
            // Intercepted in `step` before the pc advances.
            Instruction::Halt => self.state = RunState::Halted,
        }
        Ok(())
    }

    /// Issues one access and reports it to the trace sink.
    fn access(
        mem: &mut MemoryHierarchy,
        sink: &mut dyn TraceSink,
        addr: Word,
        op: MemOp,
    ) -> Result<Word, SimError> {
        let result = mem.access(addr, op)?;
        sink.after_access(&result, mem.cache());
        Ok(result.value)
    }
}
