//! Simulation utility tests.

/// Program image parsing.
pub mod loader;

/// Simulator construction, limits, and flushing.
pub mod simulator;

/// Trace sinks.
pub mod trace;
