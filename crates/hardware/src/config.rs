//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (memory capacity, a single one-word direct-mapped line).
//! 2. **Structures:** General, memory, and cache sections, each deserializable on its own.
//! 3. **Validation:** Geometry and sizing checks performed before the first access.
//!
//! Configuration is supplied as JSON (`--config`) or built from command-line flags
//! on top of `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::core::units::cache::geometry::CacheGeometry;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_MEMORY_WORDS;

    /// Backing memory capacity in words.
    pub const MEMORY_WORDS: usize = DEFAULT_MEMORY_WORDS;

    /// Default number of cache sets.
    pub const CACHE_SETS: usize = 1;

    /// Default cache associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;

    /// Default cache block size in words.
    pub const CACHE_WORDS_PER_BLOCK: usize = 1;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.verbose);
/// assert_eq!(config.memory.size_words, 65_536);
/// assert_eq!(config.cache.ways, 1);
/// ```
///
/// Deserializing from JSON, omitted fields take their defaults:
///
/// ```
/// use cachesim_core::config::Config;
///
/// let config = Config::from_json_str(r#"{
///     "general": { "verbose": true },
///     "cache": { "sets": 4, "ways": 2, "words_per_block": 4 }
/// }"#).unwrap();
/// assert!(config.general.verbose);
/// assert_eq!(config.cache.sets, 4);
/// assert_eq!(config.memory.size_words, 65_536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Backing memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Cache geometry
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and any validation error
    /// reported by [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the configuration can be simulated.
    ///
    /// The cache geometry must be valid (see [`CacheGeometry::new`]), and the
    /// memory must be non-empty and a whole number of cache blocks so that
    /// every block fill stays in bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = self.cache.geometry()?;
        if self.memory.size_words == 0 {
            return Err(ConfigError::Zero {
                field: "memory.size_words",
            });
        }
        if self.memory.size_words % geometry.words_per_block() != 0 {
            return Err(ConfigError::MemoryNotBlockAligned {
                size_words: self.memory.size_words,
                words_per_block: geometry.words_per_block(),
            });
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Dump the full cache state after every access.
    #[serde(default)]
    pub verbose: bool,

    /// Stop with an error after this many instructions (`None` runs until halt).
    #[serde(default)]
    pub max_instructions: Option<u64>,

    /// Write every dirty line back to memory when the machine halts.
    #[serde(default)]
    pub flush_on_halt: bool,
}

/// Backing memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Capacity in words
    #[serde(default = "MemoryConfig::default_size_words")]
    pub size_words: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity in words.
    fn default_size_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Cache geometry configuration.
///
/// `sets` and `words_per_block` must be powers of two; `ways` may be any
/// positive number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Number of sets
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,

    /// Lines per set (associativity)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Words per cache block
    #[serde(default = "CacheConfig::default_words_per_block")]
    pub words_per_block: usize,
}

impl CacheConfig {
    fn default_sets() -> usize {
        defaults::CACHE_SETS
    }

    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    fn default_words_per_block() -> usize {
        defaults::CACHE_WORDS_PER_BLOCK
    }

    /// Builds the validated geometry described by this section.
    ///
    /// # Errors
    ///
    /// See [`CacheGeometry::new`].
    pub fn geometry(&self) -> Result<CacheGeometry, ConfigError> {
        CacheGeometry::new(self.sets, self.ways, self.words_per_block)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sets: defaults::CACHE_SETS,
            ways: defaults::CACHE_WAYS,
            words_per_block: defaults::CACHE_WORDS_PER_BLOCK,
        }
    }
}
