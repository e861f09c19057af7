//! Word address type.
//!
//! Memory in this machine is word-granular: address `n` names the `n`-th
//! 32-bit word, not a byte. Registers hold signed words, so an address
//! computed by a program may be negative; `WordAddr` is the validated,
//! non-negative form used by the cache and backing memory.

use std::fmt;

/// A non-negative word address into backing memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordAddr(pub u32);

impl WordAddr {
    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Returns the address as an index into a word array.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Interprets a signed register value as an address.
    ///
    /// # Returns
    ///
    /// `None` when `value` is negative.
    pub fn from_word(value: i32) -> Option<Self> {
        u32::try_from(value).ok().map(Self)
    }
}

impl fmt::Display for WordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
