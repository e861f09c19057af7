//! Cache geometry and address decomposition.
//!
//! A word address splits into three fields, low bits first:
//!
//! ```text
//! | tag | set index (set_bits) | block offset (offset_bits) |
//! ```
//!
//! where `offset_bits = log2(words_per_block)` and `set_bits = log2(sets)`.
//! Both sizes must therefore be powers of two.

use crate::common::{ConfigError, WordAddr};

/// Address bits usable for indexing: addresses come from non-negative `i32` values.
const ADDRESS_BITS: u32 = 31;

/// The fields of a decomposed word address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParts {
    /// Identifies the memory block among all blocks mapping to `set`.
    pub tag: u32,
    /// Set the block maps to.
    pub set: usize,
    /// Word within the block.
    pub offset: usize,
}

/// Immutable shape of a set-associative cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    sets: usize,
    ways: usize,
    words_per_block: usize,
    offset_bits: u32,
    set_bits: u32,
}

impl CacheGeometry {
    /// Creates a validated geometry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Zero`] if any size is zero.
    /// - [`ConfigError::NotPowerOfTwo`] if `sets` or `words_per_block` is not a power of two.
    /// - [`ConfigError::GeometryTooLarge`] if set index and offset need more than 31 bits.
    pub fn new(sets: usize, ways: usize, words_per_block: usize) -> Result<Self, ConfigError> {
        let set_bits = index_bits("sets", sets)?;
        if ways == 0 {
            return Err(ConfigError::Zero { field: "ways" });
        }
        let offset_bits = index_bits("words_per_block", words_per_block)?;

        let bits = set_bits + offset_bits;
        if bits > ADDRESS_BITS {
            return Err(ConfigError::GeometryTooLarge {
                sets,
                words_per_block,
                bits,
            });
        }

        Ok(Self {
            sets,
            ways,
            words_per_block,
            offset_bits,
            set_bits,
        })
    }

    /// Number of sets.
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Lines per set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Words per block.
    pub const fn words_per_block(&self) -> usize {
        self.words_per_block
    }

    /// Width of the block offset field.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the set index field.
    pub const fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Total number of lines in the cache.
    pub const fn lines(&self) -> usize {
        self.sets * self.ways
    }

    /// Splits an address into tag, set index, and block offset.
    pub const fn decode(&self, addr: WordAddr) -> AddressParts {
        let a = addr.val();
        AddressParts {
            tag: a >> (self.offset_bits + self.set_bits),
            set: ((a >> self.offset_bits) & low_mask(self.set_bits)) as usize,
            offset: (a & low_mask(self.offset_bits)) as usize,
        }
    }

    /// Reassembles the base address of the block identified by `tag` and `set`.
    pub const fn block_base(&self, tag: u32, set: usize) -> WordAddr {
        WordAddr(((tag << self.set_bits) | set as u32) << self.offset_bits)
    }

    /// Returns the base address of the block containing `addr`.
    ///
    /// Only the block offset bits are cleared.
    pub const fn block_base_of(&self, addr: WordAddr) -> WordAddr {
        WordAddr(addr.val() & !low_mask(self.offset_bits))
    }
}

/// Mask with the low `bits` bits set; `bits` is at most 31.
const fn low_mask(bits: u32) -> u32 {
    (1u32 << bits) - 1
}

/// Returns `log2(value)` for a power of two, rejecting anything else.
fn index_bits(field: &'static str, value: usize) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero { field });
    }
    if !value.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo { field, value });
    }
    Ok(value.trailing_zeros())
}
