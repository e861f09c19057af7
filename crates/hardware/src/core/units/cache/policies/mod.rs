//! Cache Replacement Policies.
//!
//! A policy chooses which way of a full set to reuse on a miss. Policies read
//! line metadata only; any write-back of the chosen line is the caller's job.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by the per-line recency counters.

/// Least Recently Used replacement policy.
pub mod lru;

use std::fmt;

pub use lru::LruPolicy;

use super::CacheLine;

/// Trait for cache replacement policies.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Selects the way to reuse within one set.
    ///
    /// # Arguments
    ///
    /// * `set` - The lines of the set, in way order. Never empty.
    ///
    /// # Returns
    ///
    /// The index of the way to fill.
    fn victim(&self, set: &[CacheLine]) -> usize;
}
