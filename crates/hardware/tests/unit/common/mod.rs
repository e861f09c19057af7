//! Tests for shared types.


/// Error messages and conversions.
pub mod error;
