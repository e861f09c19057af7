//! Simulation statistics collection and reporting.
//!
//! This module tracks the metrics of a run. It provides:
//! 1. **Instruction mix:** Executed instructions by category, halt included.
//! 2. **Cache behavior:** Reads, writes, hits, misses, write-backs, and discards.
//! 3. **Transfers:** Event counts for each transfer direction.

use crate::common::AccessType;
use crate::isa::Instruction;
use crate::soc::memory::transfer::{TransferEvent, TransferKind};

/// Hit or miss outcome of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The block was resident.
    Hit,
    /// The block had to be filled from memory.
    Miss,
}

/// Counters maintained by the memory hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Read accesses (fetches and loads).
    pub reads: u64,
    /// Write accesses (stores).
    pub writes: u64,
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that required a fill.
    pub misses: u64,
    /// Dirty blocks written back to memory, flushes included.
    pub writebacks: u64,
    /// Clean blocks discarded on eviction.
    pub discards: u64,
    /// Transfer event counts, indexed by [`TransferKind::index`].
    pub transfers: [u64; 5],
}

impl CacheStats {
    /// Records one access and the transfers it produced.
    pub fn record_access(
        &mut self,
        access: AccessType,
        outcome: CacheOutcome,
        events: &[TransferEvent],
    ) {
        match access {
            AccessType::Read => self.reads += 1,
            AccessType::Write => self.writes += 1,
        }
        match outcome {
            CacheOutcome::Hit => self.hits += 1,
            CacheOutcome::Miss => self.misses += 1,
        }
        for event in events {
            self.record_transfer(event);
        }
    }

    /// Records a single transfer event.
    pub fn record_transfer(&mut self, event: &TransferEvent) {
        self.transfers[event.kind.index()] += 1;
        match event.kind {
            TransferKind::CacheToMemory => self.writebacks += 1,
            TransferKind::CacheToNowhere => self.discards += 1,
            _ => {}
        }
    }

    /// Number of transfers of `kind`.
    pub const fn transfers_of(&self, kind: TransferKind) -> u64 {
        self.transfers[kind.index()]
    }

    /// Total accesses.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that hit, or 0 before the first access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Statistics for a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Instructions fetched and executed, the final halt included.
    pub instructions: u64,
    /// Count of add and nand instructions.
    pub inst_alu: u64,
    /// Count of lw instructions.
    pub inst_load: u64,
    /// Count of sw instructions.
    pub inst_store: u64,
    /// Count of beq instructions.
    pub inst_branch: u64,
    /// Count of jalr instructions.
    pub inst_jump: u64,
    /// Count of noop instructions and inert data words.
    pub inst_other: u64,
    /// Memory hierarchy counters.
    pub cache: CacheStats,
}

impl SimStats {
    /// Counts one executed instruction.
    pub fn record_instruction(&mut self, inst: &Instruction) {
        self.instructions += 1;
        match inst {
            Instruction::Add { .. } | Instruction::Nand { .. } => self.inst_alu += 1,
            Instruction::Lw { .. } => self.inst_load += 1,
            Instruction::Sw { .. } => self.inst_store += 1,
            Instruction::Beq { .. } => self.inst_branch += 1,
            Instruction::Jalr { .. } => self.inst_jump += 1,
            Instruction::Noop | Instruction::Data(_) => self.inst_other += 1,
            Instruction::Halt => {}
        }
    }

    /// Prints a formatted summary to stdout.
    pub fn print(&self) {
        println!("{}", self.summary());
    }

    /// Formats the summary printed by [`SimStats::print`].
    pub fn summary(&self) -> String {
        let c = &self.cache;
        let mut lines = vec![
            format!("INSTRUCTIONS: {}", self.instructions),
            format!(
                "  alu {}  lw {}  sw {}  beq {}  jalr {}  other {}",
                self.inst_alu,
                self.inst_load,
                self.inst_store,
                self.inst_branch,
                self.inst_jump,
                self.inst_other
            ),
            format!(
                "CACHE: {} accesses ({} reads, {} writes)",
                c.accesses(),
                c.reads,
                c.writes
            ),
            format!(
                "  hits {}  misses {}  hit rate {:.2}%",
                c.hits,
                c.misses,
                c.hit_rate() * 100.0
            ),
            format!("  write-backs {}  discards {}", c.writebacks, c.discards),
        ];
        for kind in TransferKind::ALL {
            lines.push(format!(
                "  transfers {}: {}",
                kind.description(),
                c.transfers_of(kind)
            ));
        }
        lines.join("\n")
    }
}
