//! Simulator Tests.
//!
//! Construction from configuration, instruction limits, and flush-on-halt.

use cachesim_core::Simulator;
use cachesim_core::common::{ConfigError, SimError};
use cachesim_core::config::Config;
use cachesim_core::soc::TransferKind;
use pretty_assertions::assert_eq;

use crate::common::*;

#[test]
fn invalid_config_is_rejected_before_loading() {
    let mut config = Config::default();
    config.cache.sets = 6;

    let err = Simulator::new(&config, &[halt()]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::NotPowerOfTwo { field: "sets", value: 6 })
    ));
}

#[test]
fn starts_at_pc_zero_with_clear_registers() {
    let sim = TestContext::new().simulator(&[halt()]);

    assert_eq!(sim.cpu.pc, 0);
    assert_eq!(sim.cpu.regs.as_array(), &[0; 8]);
    assert!(!sim.cpu.is_halted());
    assert_eq!(sim.mem.memory().loaded_words(), 1);
    assert_eq!(sim.stats().instructions, 0);
}

#[test]
fn run_returns_final_stats() {
    let mut sim = TestContext::new().simulator(&[noop(), halt()]);
    let stats = sim.run().unwrap();

    assert_eq!(stats.instructions, 2);
    assert_eq!(stats.inst_other, 1);
    assert_eq!(stats, sim.stats());
}

#[test]
fn instruction_limit_stops_an_infinite_loop() {
    let mut sim = TestContext::new()
        .max_instructions(10)
        .simulator(&[beq(0, 0, -1)]);

    assert!(matches!(
        sim.run(),
        Err(SimError::InstructionLimit { limit: 10 })
    ));
    assert_eq!(sim.stats().instructions, 10);
}

#[test]
fn program_halting_at_the_limit_succeeds() {
    let mut sim = TestContext::new()
        .max_instructions(2)
        .simulator(&[noop(), halt()]);
    assert!(sim.run().is_ok());
}

#[test]
fn dirty_data_stays_cached_without_flush() {
    let program = [lw(1, 0, 4), sw(1, 0, 5), halt(), noop(), 42, 0];
    let sim = TestContext::new().geometry(1, 8, 1).run(&program);

    assert_eq!(sim.mem.memory().as_slice()[5], 0);
    assert_eq!(sim.mem.peek(5), Some(42));
}

#[test]
fn flush_on_halt_writes_dirty_data_back() {
    let program = [lw(1, 0, 4), sw(1, 0, 5), halt(), noop(), 42, 0];
    let sim = TestContext::new()
        .geometry(1, 8, 1)
        .flush_on_halt()
        .run(&program);

    assert_eq!(sim.mem.memory().as_slice()[5], 42);
    assert!(sim.dump_state().contains("\t\tmem[5]=42"));

    let last = sim.sink().events.last().copied().unwrap();
    assert_eq!(last.kind, TransferKind::CacheToMemory);
    assert_eq!(last.start.val(), 5);
    assert_eq!(sim.stats().cache.writebacks, 1);
}
