//! Memory Hierarchy Controller.
//!
//! `MemoryHierarchy` owns the cache and the backing memory and is the only path
//! between the processor and memory. Each access:
//! 1. **Checks bounds:** A negative or too-large address is fatal and changes nothing.
//! 2. **Ages:** Every line in the cache grows one access older.
//! 3. **Looks up:** A hit serves the word from the line.
//! 4. **Allocates on miss:** The policy picks a victim, a dirty victim is written back,
//!    and the block is filled from memory. Writes allocate too (fetch-on-write).
//! 5. **Completes:** Reads return the word, writes store it and dirty the line, and the
//!    touched line becomes the most recently used.
//!
//! Writes are never propagated immediately (write-back); memory catches up on eviction
//! or on an explicit [`MemoryHierarchy::flush`].

use tracing::{debug, trace};

use super::WordMemory;
use super::transfer::{TransferEvent, TransferKind};
use crate::common::{ConfigError, MemOp, SimError, Word};
use crate::config::Config;
use crate::core::units::cache::geometry::{AddressParts, CacheGeometry};
use crate::core::units::cache::{CacheSim, DirtyBit, ValidBit};
use crate::stats::{CacheOutcome, CacheStats};

/// Outcome of one access through the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessResult {
    /// Word read, or the word written.
    pub value: Word,
    /// Whether the block was resident.
    pub outcome: CacheOutcome,
    /// Way of the set that served the access.
    pub way: usize,
    /// Transfers performed, in order.
    pub events: Vec<TransferEvent>,
}

impl AccessResult {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        self.outcome == CacheOutcome::Hit
    }
}

/// Single-level write-back, write-allocate cache in front of backing memory.
#[derive(Debug)]
pub struct MemoryHierarchy {
    cache: CacheSim,
    memory: WordMemory,
    stats: CacheStats,
}

impl MemoryHierarchy {
    /// Puts an empty LRU cache of the given geometry in front of `memory`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MemoryNotBlockAligned`] if memory is not a whole
    /// number of blocks, since the last fill would run past the end.
    pub fn new(geometry: CacheGeometry, memory: WordMemory) -> Result<Self, ConfigError> {
        Self::with_cache(CacheSim::new(geometry), memory)
    }

    /// Puts an existing cache in front of `memory`.
    ///
    /// # Errors
    ///
    /// As [`MemoryHierarchy::new`].
    pub fn with_cache(cache: CacheSim, memory: WordMemory) -> Result<Self, ConfigError> {
        let words_per_block = cache.geometry().words_per_block();
        if memory.capacity() % words_per_block != 0 {
            return Err(ConfigError::MemoryNotBlockAligned {
                size_words: memory.capacity(),
                words_per_block,
            });
        }
        Ok(Self {
            cache,
            memory,
            stats: CacheStats::default(),
        })
    }

    /// Builds the hierarchy described by `config` around `memory`.
    ///
    /// # Errors
    ///
    /// Returns any geometry or alignment error.
    pub fn from_config(config: &Config, memory: WordMemory) -> Result<Self, ConfigError> {
        Self::new(config.cache.geometry()?, memory)
    }

    /// The cache store.
    pub const fn cache(&self) -> &CacheSim {
        &self.cache
    }

    /// Backing memory. Blocks resident and dirty in the cache may be stale here.
    pub const fn memory(&self) -> &WordMemory {
        &self.memory
    }

    /// Access counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] for an address outside memory.
    pub fn read(&mut self, addr: Word) -> Result<AccessResult, SimError> {
        self.access(addr, MemOp::Read)
    }

    /// Writes `value` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] for an address outside memory.
    pub fn write(&mut self, addr: Word, value: Word) -> Result<AccessResult, SimError> {
        self.access(addr, MemOp::Write(value))
    }

    /// Performs one access through the cache.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] for an address outside memory; neither
    /// the cache nor memory is modified in that case.
    pub fn access(&mut self, addr: Word, op: MemOp) -> Result<AccessResult, SimError> {
        let addr = self.memory.translate(addr)?;
        self.cache.age_all();

        let parts = self.cache.geometry().decode(addr);
        let mut events = Vec::with_capacity(3);
        let (way, outcome) = match self.cache.find(parts.set, parts.tag) {
            Some(way) => (way, CacheOutcome::Hit),
            None => (self.allocate(parts, &mut events), CacheOutcome::Miss),
        };

        let line = self.cache.line_mut(parts.set, way);
        let value = match op {
            MemOp::Read => {
                events.push(TransferEvent::word(addr, TransferKind::CacheToProcessor));
                line.data[parts.offset]
            }
            MemOp::Write(value) => {
                line.data[parts.offset] = value;
                line.dirty = DirtyBit::Dirty;
                events.push(TransferEvent::word(addr, TransferKind::ProcessorToCache));
                value
            }
        };
        self.cache.touch(parts.set, way);

        trace!(%addr, set = parts.set, way, ?outcome, ?op, "cache access");
        self.stats.record_access(op.access_type(), outcome, &events);

        Ok(AccessResult {
            value,
            outcome,
            way,
            events,
        })
    }

    /// Returns the current architectural value at `addr` without touching any state.
    ///
    /// A resident line takes precedence over backing memory.
    pub fn peek(&self, addr: Word) -> Option<Word> {
        let addr = self.memory.translate(addr).ok()?;
        let parts = self.cache.geometry().decode(addr);
        match self.cache.find(parts.set, parts.tag) {
            Some(way) => Some(self.cache.line(parts.set, way).data[parts.offset]),
            None => self.memory.word(addr),
        }
    }

    /// Writes every dirty line back to memory and marks it clean.
    ///
    /// Lines stay valid. Recency counters are not changed.
    ///
    /// # Returns
    ///
    /// The write-back transfers, in set/way order.
    pub fn flush(&mut self) -> Vec<TransferEvent> {
        let geometry = *self.cache.geometry();
        let mut events = Vec::new();

        for set in 0..geometry.sets() {
            for way in 0..geometry.ways() {
                let line = self.cache.line_mut(set, way);
                if line.is_valid() && line.is_dirty() {
                    let base = geometry.block_base(line.tag, set);
                    self.memory.write_block(base, &line.data);
                    line.dirty = DirtyBit::Clean;
                    let event = TransferEvent::block(
                        base,
                        geometry.words_per_block(),
                        TransferKind::CacheToMemory,
                    );
                    self.stats.record_transfer(&event);
                    events.push(event);
                }
            }
        }

        debug!(written_back = events.len(), "cache flushed");
        events
    }

    /// Claims a way for the block described by `parts` and fills it from memory.
    fn allocate(&mut self, parts: AddressParts, events: &mut Vec<TransferEvent>) -> usize {
        let geometry = *self.cache.geometry();
        let way = self.cache.select_victim(parts.set);
        self.evict(parts.set, way, events);

        let base = geometry.block_base(parts.tag, parts.set);
        let line = self.cache.line_mut(parts.set, way);
        line.data
            .copy_from_slice(self.memory.block(base, geometry.words_per_block()));
        line.valid = ValidBit::Valid;
        line.dirty = DirtyBit::Clean;
        line.tag = parts.tag;
        line.age = 0;

        debug!(%base, set = parts.set, way, "block filled");
        events.push(TransferEvent::block(
            base,
            geometry.words_per_block(),
            TransferKind::MemoryToCache,
        ));
        way
    }

    /// Empties a way, writing it back first if it is dirty.
    fn evict(&mut self, set: usize, way: usize, events: &mut Vec<TransferEvent>) {
        let geometry = *self.cache.geometry();
        let line = self.cache.line_mut(set, way);
        if !line.is_valid() {
            return;
        }

        let base = geometry.block_base(line.tag, set);
        let kind = if line.is_dirty() {
            self.memory.write_block(base, &line.data);
            line.dirty = DirtyBit::Clean;
            TransferKind::CacheToMemory
        } else {
            TransferKind::CacheToNowhere
        };
        line.valid = ValidBit::Invalid;

        debug!(%base, set, way, ?kind, "block evicted");
        events.push(TransferEvent::block(base, geometry.words_per_block(), kind));
    }
}
