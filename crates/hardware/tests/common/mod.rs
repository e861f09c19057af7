//! Shared helpers for building programs and simulators in tests.

/// Instruction word builders.
pub mod builder;


pub use builder::instruction::*;
pub use harness::TestContext;
