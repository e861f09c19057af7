//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Address Types:** A strong type for word addresses into backing memory.
//! 2. **Constants:** Architectural sizes (register count, memory size).
//! 3. **Memory Access:** The word type and the read/write operation kinds.
//! 4. **Error Handling:** Configuration, loading, and simulation error types.

/// Word address type.
pub mod addr;

/// Architectural constants.
pub mod constants;

/// Word type and memory access kinds.
pub mod data;

/// Error types for configuration, loading, and simulation.
pub mod error;

pub use addr::WordAddr;
pub use constants::NUM_REGS;
pub use data::{AccessType, MemOp, Word};
pub use error::{ConfigError, LoadError, SimError};
