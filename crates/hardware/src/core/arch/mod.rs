//! Architectural state components.
//!
//! The machine's only architectural storage besides memory and the program
//! counter is the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
