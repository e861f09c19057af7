//! Set-Associative Cache Store.
//!
//! This module implements the storage half of the cache: a `sets × ways`
//! array of lines, each holding a full block of data words together with its
//! tag, valid and dirty bits, and a recency counter. It provides:
//! 1. **Lookup:** Finding the valid line of a set whose tag matches an address.
//! 2. **Indexed Access:** Direct access to any line by `(set, way)`.
//! 3. **Aging:** Cache-wide recency counting used by the replacement policy.
//!
//! Fills, evictions, and write-back are orchestrated by
//! [`MemoryHierarchy`](crate::soc::memory::controller::MemoryHierarchy).

/// Cache geometry and address decomposition.
pub mod geometry;

/// Cache replacement policy implementations.
pub mod policies;

use std::fmt;

use self::geometry::CacheGeometry;
use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::{Word, WordAddr};

/// Whether a line holds a memory block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValidBit {
    /// The line holds the block named by its tag.
    Valid,
    /// The line holds nothing.
    #[default]
    Invalid,
}

/// Whether a line's data differs from backing memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DirtyBit {
    /// Written since the fill; must be written back on eviction.
    Dirty,
    /// Identical to backing memory.
    #[default]
    Clean,
}

impl fmt::Display for ValidBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        })
    }
}

impl fmt::Display for DirtyBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dirty => "dirty",
            Self::Clean => "clean",
        })
    }
}

/// A cache line: one block of data plus its metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheLine {
    pub(crate) valid: ValidBit,
    pub(crate) dirty: DirtyBit,
    pub(crate) tag: u32,
    pub(crate) age: u32,
    pub(crate) data: Vec<Word>,
}

impl CacheLine {
    /// Creates an invalid, clean line with a zeroed block.
    fn new(words_per_block: usize) -> Self {
        Self {
            valid: ValidBit::Invalid,
            dirty: DirtyBit::Clean,
            tag: 0,
            age: 0,
            data: vec![0; words_per_block],
        }
    }

    /// Valid bit.
    pub const fn valid(&self) -> ValidBit {
        self.valid
    }

    /// Dirty bit.
    pub const fn dirty(&self) -> DirtyBit {
        self.dirty
    }

    /// Returns `true` if the line holds a block.
    pub fn is_valid(&self) -> bool {
        self.valid == ValidBit::Valid
    }

    /// Returns `true` if the line must be written back before reuse.
    pub fn is_dirty(&self) -> bool {
        self.dirty == DirtyBit::Dirty
    }

    /// Tag of the resident block (meaningless while invalid).
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Accesses since this line was last touched; larger is staler.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// The block's data words.
    pub fn data(&self) -> &[Word] {
        &self.data
    }
}

/// Set-associative cache store with a pluggable replacement policy.
///
/// Lines are stored flattened, `lines[set * ways + way]`. The store itself never
/// touches backing memory.
#[derive(Debug)]
pub struct CacheSim {
    geometry: CacheGeometry,
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
}

impl CacheSim {
    /// Creates an empty LRU cache with the given geometry.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self::with_policy(geometry, Box::new(LruPolicy))
    }

    /// Creates an empty cache using `policy` for victim selection.
    pub fn with_policy(geometry: CacheGeometry, policy: Box<dyn ReplacementPolicy>) -> Self {
        Self {
            lines: vec![CacheLine::new(geometry.words_per_block()); geometry.lines()],
            geometry,
            policy,
        }
    }

    /// The cache's geometry.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Finds the way holding the block that contains `addr`.
    ///
    /// # Returns
    ///
    /// The way of the valid line in the address's set whose tag matches, or
    /// `None` on a miss.
    pub fn lookup(&self, addr: WordAddr) -> Option<usize> {
        let parts = self.geometry.decode(addr);
        self.find(parts.set, parts.tag)
    }

    /// Finds the way in `set` holding a valid line tagged `tag`.
    pub fn find(&self, set: usize, tag: u32) -> Option<usize> {
        self.set_lines(set)
            .iter()
            .position(|line| line.is_valid() && line.tag == tag)
    }

    /// Returns the line at `(set, way)`.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is outside the geometry.
    pub fn line(&self, set: usize, way: usize) -> &CacheLine {
        &self.lines[self.index(set, way)]
    }

    pub(crate) fn line_mut(&mut self, set: usize, way: usize) -> &mut CacheLine {
        let idx = self.index(set, way);
        &mut self.lines[idx]
    }

    /// Returns all ways of `set`, in way order.
    pub fn set_lines(&self, set: usize) -> &[CacheLine] {
        let base = set * self.geometry.ways();
        &self.lines[base..base + self.geometry.ways()]
    }

    /// Asks the replacement policy which way of `set` to reuse.
    pub fn select_victim(&self, set: usize) -> usize {
        self.policy.victim(self.set_lines(set))
    }

    /// Ages every line in the cache by one access.
    pub fn age_all(&mut self) {
        for line in &mut self.lines {
            line.age = line.age.saturating_add(1);
        }
    }

    /// Marks the line at `(set, way)` as the most recently used.
    pub fn touch(&mut self, set: usize, way: usize) {
        self.line_mut(set, way).age = 0;
    }

    /// Iterates over every line with its `(set, way)` position.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &CacheLine)> {
        let ways = self.geometry.ways();
        self.lines
            .iter()
            .enumerate()
            .map(move |(idx, line)| (idx / ways, idx % ways, line))
    }

    /// Returns the base addresses of all resident blocks, in storage order.
    pub fn resident_blocks(&self) -> Vec<WordAddr> {
        self.entries()
            .filter(|(_, _, line)| line.is_valid())
            .map(|(set, _, line)| self.geometry.block_base(line.tag, set))
            .collect()
    }

    #[inline(always)]
    const fn index(&self, set: usize, way: usize) -> usize {
        set * self.geometry.ways() + way
    }
}

impl fmt::Display for CacheSim {
    /// Dumps every line: tag, valid and dirty bits, recency, and data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cache:")?;
        for set in 0..self.geometry.sets() {
            writeln!(f, "\tset {set}:")?;
            for (way, line) in self.set_lines(set).iter().enumerate() {
                write!(
                    f,
                    "\t\tway {way}: tag {} {} {} age {} data [",
                    line.tag, line.valid, line.dirty, line.age
                )?;
                for (i, word) in line.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{word}")?;
                }
                writeln!(f, "]")?;
            }
        }
        write!(f, "end cache")
    }
}
