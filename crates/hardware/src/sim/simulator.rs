//! Simulator: owns the CPU, the memory hierarchy, and the trace sink side by side.
//!
//! Keeping them as sibling fields lets [`Cpu::step`] borrow the hierarchy and
//! the sink mutably at the same time without any interior mutability.

use tracing::{debug, info};

use super::trace::{NullTrace, TraceSink};
use crate::common::{SimError, Word};
use crate::config::{Config, GeneralConfig};
use crate::core::Cpu;
use crate::isa::Instruction;
use crate::soc::memory::WordMemory;
use crate::soc::memory::controller::MemoryHierarchy;
use crate::stats::SimStats;

/// Top-level simulator: architectural state plus memory hierarchy.
#[derive(Debug)]
pub struct Simulator<S: TraceSink = NullTrace> {
    /// Processor state (pc, registers, run state).
    pub cpu: Cpu,
    /// Cache and backing memory.
    pub mem: MemoryHierarchy,
    general: GeneralConfig,
    stats: SimStats,
    sink: S,
}

impl Simulator<NullTrace> {
    /// Creates a simulator that discards all transfer events.
    ///
    /// # Errors
    ///
    /// As [`Simulator::with_sink`].
    pub fn new(config: &Config, image: &[Word]) -> Result<Self, SimError> {
        Self::with_sink(config, image, NullTrace)
    }
}

impl<S: TraceSink> Simulator<S> {
    /// Validates `config`, loads `image` at address 0, and builds an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for an invalid configuration and
    /// [`SimError::Load`] if the image does not fit in memory.
    pub fn with_sink(config: &Config, image: &[Word], sink: S) -> Result<Self, SimError> {
        config.validate()?;
        let memory = WordMemory::with_image(config.memory.size_words, image)?;
        let mem = MemoryHierarchy::from_config(config, memory)?;
        debug!(
            sets = config.cache.sets,
            ways = config.cache.ways,
            words_per_block = config.cache.words_per_block,
            memory_words = config.memory.size_words,
            program_words = image.len(),
            "simulator created"
        );

        Ok(Self {
            cpu: Cpu::new(),
            mem,
            general: config.general.clone(),
            stats: SimStats::default(),
            sink,
        })
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The executed instruction, or `None` once the machine has halted.
    ///
    /// # Errors
    ///
    /// Propagates any fatal error from the processor.
    pub fn step(&mut self) -> Result<Option<Instruction>, SimError> {
        let inst = self.cpu.step(&mut self.mem, &mut self.sink)?;
        if let Some(inst) = &inst {
            self.stats.record_instruction(inst);
        }
        Ok(inst)
    }

    /// Runs until the machine halts.
    ///
    /// If `flush_on_halt` is configured, dirty lines are written back after the
    /// halt and the write-backs are reported to the sink.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error, or [`SimError::InstructionLimit`] when
    /// `max_instructions` is reached before a halt.
    pub fn run(&mut self) -> Result<SimStats, SimError> {
        while !self.cpu.is_halted() {
            let executed = self.stats.instructions;
            if let Some(limit) = self.general.max_instructions.filter(|&l| executed >= l) {
                return Err(SimError::InstructionLimit { limit });
            }
            let _ = self.step()?;
        }

        if self.general.flush_on_halt {
            self.flush();
        }
        info!(instructions = self.stats.instructions, "run complete");
        Ok(self.stats())
    }

    /// Writes every dirty line back to memory, reporting each transfer.
    pub fn flush(&mut self) {
        for event in self.mem.flush() {
            self.sink.transfer(&event);
        }
    }

    /// Statistics so far: instruction counts plus cache counters.
    pub fn stats(&self) -> SimStats {
        SimStats {
            cache: self.mem.stats().clone(),
            ..self.stats.clone()
        }
    }

    /// Formats pc, memory contents, and registers.
    pub fn dump_state(&self) -> String {
        self.cpu.dump_state(&self.mem)
    }

    /// The trace sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the simulator, returning its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
