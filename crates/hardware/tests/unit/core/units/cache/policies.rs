//! Replacement Policy Tests.
//!
//! Checks `LruPolicy` victim selection on sets populated through the memory
//! hierarchy: invalid ways first, then the stalest line.

use cachesim_core::core::units::cache::policies::{LruPolicy, ReplacementPolicy};
use proptest::prelude::*;

use crate::common::TestContext;

#[test]
fn empty_set_uses_way_zero() {
    let mem = TestContext::new().geometry(1, 4, 1).hierarchy();
    assert_eq!(LruPolicy.victim(mem.cache().set_lines(0)), 0);
}

#[test]
fn invalid_way_preferred_over_stale_valid_way() {
    let mut mem = TestContext::new().geometry(1, 4, 1).hierarchy();
    let _ = mem.read(0).unwrap();
    let _ = mem.read(1).unwrap();

    assert_eq!(LruPolicy.victim(mem.cache().set_lines(0)), 2);
}

#[test]
fn full_set_evicts_oldest() {
    let mut mem = TestContext::new().geometry(1, 3, 1).hierarchy();
    for addr in [0, 1, 2, 1, 0] {
        let _ = mem.read(addr).unwrap();
    }

    // Way 2 (block 2) has gone longest without a reference.
    assert_eq!(LruPolicy.victim(mem.cache().set_lines(0)), 2);
}

proptest! {
    /// After any access pattern over exactly `ways` blocks, the victim of the
    /// full set holds the block referenced least recently.
    #[test]
    fn victim_is_least_recently_referenced(
        ways in 2usize..6,
        pattern in prop::collection::vec(0i32..6, 0..40),
    ) {
        let mut mem = TestContext::new().geometry(1, ways, 1).hierarchy();
        let mut last_ref = vec![0usize; ways];

        let accesses = (0..ways as i32).chain(pattern.into_iter().filter(|&a| a < ways as i32));
        for (time, addr) in accesses.enumerate() {
            let _ = mem.read(addr).unwrap();
            last_ref[addr as usize] = time;
        }

        let lines = mem.cache().set_lines(0);
        prop_assert!(lines.iter().all(|l| l.is_valid()));
        let victim = LruPolicy.victim(lines);
        let stalest = (0..ways).min_by_key(|&a| last_ref[a]).unwrap();
        prop_assert_eq!(lines[victim].tag(), stalest as u32);
    }
}
