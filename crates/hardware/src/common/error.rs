//! Error definitions.
//!
//! This module defines the three failure domains of the simulator:
//! 1. **Configuration:** Cache geometry or memory sizing that cannot be simulated.
//! 2. **Loading:** Program images that cannot be read or do not fit in memory.
//! 3. **Simulation:** Fatal conditions raised while a program runs.
//!
//! Unrecognized opcodes are deliberately absent: they execute as inert data words.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::Word;

/// A configuration that is rejected before the first access.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A size used for bit-mask address decomposition is not a power of two.
    #[error("{field} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A size parameter is zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// Set index and block offset together need more bits than an address has.
    #[error("{sets} sets of {words_per_block}-word blocks need {bits} index bits, addresses only have 31")]
    GeometryTooLarge {
        /// Number of sets.
        sets: usize,
        /// Words per block.
        words_per_block: usize,
        /// Bits required for set index plus block offset.
        bits: u32,
    },

    /// Memory capacity is not a whole number of cache blocks.
    #[error("memory size of {size_words} words is not a multiple of the {words_per_block}-word block size")]
    MemoryNotBlockAligned {
        /// Configured memory capacity in words.
        size_words: usize,
        /// Words per cache block.
        words_per_block: usize,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration file '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A program image that cannot be placed in backing memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("cannot open file '{}': {source}", path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of the image is not a decimal machine word.
    #[error("line {line}: '{text}' is not a valid machine word")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The image has more words than memory can hold.
    #[error("program has {words} words but memory holds only {capacity}")]
    TooLarge {
        /// Number of words in the image.
        words: usize,
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// A fatal condition that ends a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A fetch, load, or store addressed a word outside backing memory.
    #[error("memory access out of bounds: address {address} (memory holds {capacity} words)")]
    OutOfBounds {
        /// The address as computed by the program.
        address: Word,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// The program ran for the configured maximum without halting.
    #[error("instruction limit of {limit} reached without halting")]
    InstructionLimit {
        /// The configured limit.
        limit: u64,
    },

    /// The simulator could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}
