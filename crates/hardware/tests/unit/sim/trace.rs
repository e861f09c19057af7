//! Trace Sink Tests.

use cachesim_core::common::WordAddr;
use cachesim_core::sim::trace::{TraceSink, WriterTrace};
use cachesim_core::soc::{TransferEvent, TransferKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::TestContext;

#[rstest]
#[case(TransferKind::CacheToProcessor, "transferring word [3-3] from the cache to the processor")]
#[case(TransferKind::ProcessorToCache, "transferring word [3-3] from the processor to the cache")]
#[case(TransferKind::MemoryToCache, "transferring word [3-3] from the memory to the cache")]
#[case(TransferKind::CacheToMemory, "transferring word [3-3] from the cache to the memory")]
#[case(TransferKind::CacheToNowhere, "transferring word [3-3] from the cache to nowhere")]
fn single_word_event_lines(#[case] kind: TransferKind, #[case] expected: &str) {
    assert_eq!(TransferEvent::word(WordAddr(3), kind).to_string(), expected);
}

#[test]
fn block_event_spans_the_block() {
    let event = TransferEvent::block(WordAddr(8), 4, TransferKind::MemoryToCache);
    assert_eq!(event.end(), WordAddr(11));
    assert_eq!(
        event.to_string(),
        "transferring word [8-11] from the memory to the cache"
    );
}

#[test]
fn writer_prints_events_in_order() {
    let mut mem = TestContext::new().geometry(1, 1, 1).hierarchy();
    let mut trace = WriterTrace::new(Vec::new(), false);

    let first = mem.write(0, 5).unwrap();
    trace.after_access(&first, mem.cache());
    let second = mem.read(1).unwrap();
    trace.after_access(&second, mem.cache());

    let out = String::from_utf8(trace.into_inner()).unwrap();
    assert_eq!(
        out,
        "transferring word [0-0] from the memory to the cache\n\
         transferring word [0-0] from the processor to the cache\n\
         transferring word [0-0] from the cache to the memory\n\
         transferring word [1-1] from the memory to the cache\n\
         transferring word [1-1] from the cache to the processor\n"
    );
}

#[test]
fn verbose_writer_dumps_cache_after_each_access() {
    let mut mem = TestContext::new().geometry(1, 1, 1).hierarchy();
    let mut trace = WriterTrace::new(Vec::new(), true);

    let result = mem.read(2).unwrap();
    trace.after_access(&result, mem.cache());

    let out = String::from_utf8(trace.into_inner()).unwrap();
    assert_eq!(
        out,
        "transferring word [2-2] from the memory to the cache\n\
         transferring word [2-2] from the cache to the processor\n\
         cache:\n\
         \tset 0:\n\
         \t\tway 0: tag 2 valid clean age 0 data [20]\n\
         end cache\n"
    );
}

#[test]
fn recording_trace_sees_every_access_of_a_run() {
    let sim = TestContext::new().run(&[crate::common::lw(1, 0, 2), crate::common::halt(), 4]);
    let trace = sim.into_sink();

    assert_eq!(trace.accesses, 3);
    assert_eq!(
        trace.events,
        vec![
            TransferEvent::word(WordAddr(0), TransferKind::MemoryToCache),
            TransferEvent::word(WordAddr(0), TransferKind::CacheToProcessor),
            TransferEvent::word(WordAddr(0), TransferKind::CacheToNowhere),
            TransferEvent::word(WordAddr(2), TransferKind::MemoryToCache),
            TransferEvent::word(WordAddr(2), TransferKind::CacheToProcessor),
            TransferEvent::word(WordAddr(2), TransferKind::CacheToNowhere),
            TransferEvent::word(WordAddr(1), TransferKind::MemoryToCache),
            TransferEvent::word(WordAddr(1), TransferKind::CacheToProcessor),
        ]
    );
}
