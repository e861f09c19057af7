//! Statistics Tests.

use cachesim_core::common::AccessType;
use cachesim_core::isa::decode;
use cachesim_core::stats::{CacheOutcome, CacheStats, SimStats};
use pretty_assertions::assert_eq;

use crate::common::*;

#[test]
fn hit_rate_is_zero_before_any_access() {
    assert!(CacheStats::default().hit_rate().abs() < f64::EPSILON);
}

#[test]
fn records_instruction_mix() {
    let mut stats = SimStats::default();
    for word in [add(0, 0, 1), nand(0, 0, 1), lw(0, 0, 0), sw(0, 0, 0), beq(0, 0, 0)] {
        stats.record_instruction(&decode(word));
    }
    stats.record_instruction(&decode(jalr(0, 1)));
    stats.record_instruction(&decode(noop()));
    stats.record_instruction(&decode(-1));
    stats.record_instruction(&decode(halt()));

    assert_eq!(stats.instructions, 9);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_other, 2);
}

#[test]
fn records_access_outcomes() {
    let mut stats = CacheStats::default();
    stats.record_access(AccessType::Read, CacheOutcome::Hit, &[]);
    stats.record_access(AccessType::Write, CacheOutcome::Miss, &[]);

    assert_eq!(stats.reads, 1);
    assert_eq!(stats.writes, 1);
    assert_eq!(stats.accesses(), 2);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn summary_reports_totals() {
    let sim = TestContext::new().run(&[noop(), halt()]);
    let summary = sim.stats().summary();

    assert!(summary.starts_with("INSTRUCTIONS: 2"));
    assert!(summary.contains("CACHE: 2 accesses (2 reads, 0 writes)"));
    assert!(summary.contains("transfers from the memory to the cache: 2"));
}
