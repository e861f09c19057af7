//! Data transfer events.
//!
//! Each access produces an ordered list of transfers. The five kinds cover every
//! direction data can move in a single-level write-back cache:
//!
//! - `CacheToProcessor`: a read is satisfied from the cache.
//! - `ProcessorToCache`: a write lands in the cache.
//! - `MemoryToCache`: a block is filled on a miss.
//! - `CacheToMemory`: a dirty block is written back on eviction.
//! - `CacheToNowhere`: a clean block is discarded on eviction.

use std::fmt;

use crate::common::WordAddr;

/// Source and destination of a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Cache to processor (read).
    CacheToProcessor,
    /// Processor to cache (write).
    ProcessorToCache,
    /// Memory to cache (fill).
    MemoryToCache,
    /// Cache to memory (dirty eviction).
    CacheToMemory,
    /// Cache to nowhere (clean eviction).
    CacheToNowhere,
}

impl TransferKind {
    /// All kinds, in a fixed order usable for indexing counters.
    pub const ALL: [Self; 5] = [
        Self::CacheToProcessor,
        Self::ProcessorToCache,
        Self::MemoryToCache,
        Self::CacheToMemory,
        Self::CacheToNowhere,
    ];

    /// Position of this kind in [`TransferKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::CacheToProcessor => 0,
            Self::ProcessorToCache => 1,
            Self::MemoryToCache => 2,
            Self::CacheToMemory => 3,
            Self::CacheToNowhere => 4,
        }
    }

    /// Human-readable direction, e.g. `from the memory to the cache`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::CacheToProcessor => "from the cache to the processor",
            Self::ProcessorToCache => "from the processor to the cache",
            Self::MemoryToCache => "from the memory to the cache",
            Self::CacheToMemory => "from the cache to the memory",
            Self::CacheToNowhere => "from the cache to nowhere",
        }
    }
}

/// A contiguous range of words moved in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferEvent {
    /// First word address of the range.
    pub start: WordAddr,
    /// Number of words moved.
    pub size: usize,
    /// Direction of the move.
    pub kind: TransferKind,
}

impl TransferEvent {
    /// A single-word transfer between processor and cache.
    pub const fn word(addr: WordAddr, kind: TransferKind) -> Self {
        Self {
            start: addr,
            size: 1,
            kind,
        }
    }

    /// A whole-block transfer between cache and memory.
    pub const fn block(base: WordAddr, size: usize, kind: TransferKind) -> Self {
        Self {
            start: base,
            size,
            kind,
        }
    }

    /// Last word address of the range.
    pub const fn end(&self) -> WordAddr {
        WordAddr(self.start.val() + self.size as u32 - 1)
    }
}

impl fmt::Display for TransferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transferring word [{}-{}] {}",
            self.start,
            self.end(),
            self.kind.description()
        )
    }
}
