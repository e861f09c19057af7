//! Cache-fronted ISA simulator library.
//!
//! This crate simulates a small eight-instruction machine whose every memory
//! access goes through a configurable cache:
//! 1. **Core:** Program counter, eight registers, and the fetch-decode-execute loop.
//! 2. **Cache:** Set-associative store, address decomposition, and LRU replacement.
//! 3. **Memory:** Backing memory and the write-back, fetch-on-write controller.
//! 4. **ISA:** Instruction encoding, decoding, and disassembly.
//! 5. **Simulation:** Program loading, configuration, trace sinks, and statistics.

/// Common types and constants (addresses, words, access types, errors).
pub mod common;
/// Simulator configuration (defaults, sections, validation).
pub mod config;
/// CPU core and cache store.
pub mod core;
/// Instruction set (opcodes, field layout, decode, disassembly).
pub mod isa;
/// Program loader, trace sinks, and the top-level simulator.
pub mod sim;
/// Backing memory and the memory hierarchy controller.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural processor state.
pub use crate::core::Cpu;
/// Top-level simulator tying the CPU to the memory hierarchy.
pub use crate::sim::Simulator;
/// Cache plus backing memory; the only path from the CPU to memory.
pub use crate::soc::MemoryHierarchy;
