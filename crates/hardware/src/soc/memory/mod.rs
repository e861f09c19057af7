//! Backing Memory and the Memory Hierarchy.
//!
//! This module implements everything below the execution engine. It provides:
//! 1. **Backing Memory:** `WordMemory`, the flat word array that is the memory of record.
//! 2. **Controller:** `MemoryHierarchy`, the single entry point for reads and writes,
//!    which routes every access through the cache.
//! 3. **Transfers:** The events describing each movement of data between processor,
//!    cache, and memory.

/// Memory hierarchy controller: hit/miss handling, fills, and write-back.
pub mod controller;

/// Data transfer events emitted by the controller.
pub mod transfer;

use crate::common::{LoadError, SimError, Word, WordAddr};

/// Flat, fixed-capacity word-addressed memory.
///
/// After loading, only [`MemoryHierarchy`](controller::MemoryHierarchy) mutates it,
/// and only a whole block at a time (fill or write-back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<Word>,
    loaded: usize,
}

impl WordMemory {
    /// Creates a zero-filled memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
            loaded: 0,
        }
    }

    /// Creates a memory of `capacity` words holding `image` from address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit.
    pub fn with_image(capacity: usize, image: &[Word]) -> Result<Self, LoadError> {
        let mut memory = Self::new(capacity);
        memory.load(image)?;
        Ok(memory)
    }

    /// Copies a program image to the start of memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit.
    pub fn load(&mut self, image: &[Word]) -> Result<(), LoadError> {
        if image.len() > self.words.len() {
            return Err(LoadError::TooLarge {
                words: image.len(),
                capacity: self.words.len(),
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        self.loaded = image.len();
        Ok(())
    }

    /// Capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Number of words supplied by the last load.
    pub const fn loaded_words(&self) -> usize {
        self.loaded
    }

    /// Validates a program-computed address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfBounds`] if `addr` is negative or not below the capacity.
    pub fn translate(&self, addr: Word) -> Result<WordAddr, SimError> {
        WordAddr::from_word(addr)
            .filter(|a| a.index() < self.words.len())
            .ok_or(SimError::OutOfBounds {
                address: addr,
                capacity: self.words.len(),
            })
    }

    /// Returns the word at `addr`, or `None` past the end.
    pub fn word(&self, addr: WordAddr) -> Option<Word> {
        self.words.get(addr.index()).copied()
    }

    /// The whole memory as a slice.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// The `len` words starting at `base`.
    pub(crate) fn block(&self, base: WordAddr, len: usize) -> &[Word] {
        &self.words[base.index()..base.index() + len]
    }

    /// Overwrites the words starting at `base` with `data`.
    pub(crate) fn write_block(&mut self, base: WordAddr, data: &[Word]) {
        self.words[base.index()..base.index() + data.len()].copy_from_slice(data);
    }
}
