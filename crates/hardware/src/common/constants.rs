//! Architectural constants.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Default capacity of backing memory in words.
pub const DEFAULT_MEMORY_WORDS: usize = 65_536;
