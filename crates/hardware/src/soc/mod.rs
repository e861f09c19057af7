//! System components below the processor.
//!
//! Holds backing memory and the controller that places the cache between it
//! and the execution engine.

/// Backing memory, the hierarchy controller, and transfer events.
pub mod memory;

pub use memory::WordMemory;
pub use memory::controller::{AccessResult, MemoryHierarchy};
pub use memory::transfer::{TransferEvent, TransferKind};
