//! Core processor implementation.
//!
//! This module contains the processor: its architectural state, the
//! fetch-decode-execute loop, and the units it is built from (the cache).

/// Architectural state (register file).
pub mod arch;

/// CPU state and the execution engine.
pub mod cpu;

/// Hardware units (set-associative cache).
pub mod units;

pub use self::cpu::{Cpu, RunState};
