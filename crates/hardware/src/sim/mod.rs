//! Simulation utilities and program loading.
//!
//! Provides the program loader, the trace sinks that receive transfer events,
//! and the `Simulator` that ties the CPU and the memory hierarchy together.

/// Program image loading.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

/// Transfer and cache-state trace sinks.
pub mod trace;

pub use simulator::Simulator;
