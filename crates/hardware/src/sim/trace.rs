//! Trace sinks.
//!
//! Every access through the memory hierarchy produces an ordered list of
//! transfer events. The execution engine hands each access to a `TraceSink`
//! as soon as it completes, so event order across accesses is preserved.
//!
//! - `NullTrace` drops everything.
//! - `RecordingTrace` keeps the events in memory.
//! - `WriterTrace` prints one line per event and, when verbose, the full cache
//!   state after every access.

use std::fmt;
use std::io::{self, Write};

use crate::core::units::cache::CacheSim;
use crate::soc::memory::controller::AccessResult;
use crate::soc::memory::transfer::TransferEvent;

/// Consumer of transfer events.
pub trait TraceSink: fmt::Debug {
    /// Receives one transfer event.
    fn transfer(&mut self, event: &TransferEvent);

    /// Receives a completed access and the cache state it left behind.
    ///
    /// The default forwards each event to [`TraceSink::transfer`].
    fn after_access(&mut self, result: &AccessResult, _cache: &CacheSim) {
        for event in &result.events {
            self.transfer(event);
        }
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn transfer(&mut self, _event: &TransferEvent) {}
}

/// Keeps every event, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTrace {
    /// Events received so far.
    pub events: Vec<TransferEvent>,
    /// Number of accesses reported.
    pub accesses: usize,
}

impl RecordingTrace {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for RecordingTrace {
    fn transfer(&mut self, event: &TransferEvent) {
        self.events.push(*event);
    }

    fn after_access(&mut self, result: &AccessResult, _cache: &CacheSim) {
        self.accesses += 1;
        self.events.extend_from_slice(&result.events);
    }
}

/// Writes line-oriented, human-readable trace output.
#[derive(Debug)]
pub struct WriterTrace<W: Write> {
    out: W,
    verbose: bool,
}

impl WriterTrace<io::Stdout> {
    /// A trace printing to stdout.
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> WriterTrace<W> {
    /// A trace writing to `out`; `verbose` adds a cache dump after each access.
    pub const fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    // Trace output is best-effort: a closed stdout must not abort the simulation.
    fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(args);
        let _ = self.out.write_all(b"\n");
    }
}

impl<W: Write + fmt::Debug> TraceSink for WriterTrace<W> {
    fn transfer(&mut self, event: &TransferEvent) {
        self.line(format_args!("{event}"));
    }

    fn after_access(&mut self, result: &AccessResult, cache: &CacheSim) {
        for event in &result.events {
            self.transfer(event);
        }
        if self.verbose {
            self.line(format_args!("{cache}"));
        }
    }
}

/// Trace printing to standard output.
pub type StdoutTrace = WriterTrace<io::Stdout>;
