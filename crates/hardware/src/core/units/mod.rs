//! Hardware units.
//!
//! Building blocks used by the memory hierarchy.

/// Set-associative cache store, geometry, and replacement policies.
pub mod cache;
