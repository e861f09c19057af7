//! Least Recently Used (LRU) Replacement Policy.
//!
//! Every line carries a recency counter that the cache increments on every
//! access and resets when the line is touched, so the counter is the number of
//! accesses since the line was last used. The victim is the line with the
//! largest counter.
//!
//! # Selection order
//!
//! 1. The first invalid way, if any: empty slots are filled before anything is evicted.
//! 2. Otherwise the way with the largest counter; on ties the lowest way wins.
//!
//! # Performance
//!
//! - `victim()`: O(W) where W is the number of ways
//! - No state beyond the counters stored in the lines themselves

use super::ReplacementPolicy;
use crate::core::units::cache::CacheLine;

/// LRU policy. Stateless: recency lives in the lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    fn victim(&self, set: &[CacheLine]) -> usize {
        let mut victim = 0;
        let mut oldest: Option<u32> = None;

        for (way, line) in set.iter().enumerate() {
            if !line.is_valid() {
                return way;
            }
            // Strict `>` keeps the lowest way on ties.
            if oldest.is_none_or(|age| line.age() > age) {
                victim = way;
                oldest = Some(line.age());
            }
        }

        victim
    }
}
