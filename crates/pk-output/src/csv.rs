//! CSV-backed [`EventSink`] — two files (`events.csv`, `summaries.csv`)
//! written as the run progresses, with `finish` flushing both.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use pk_trace::{EventSink, RecordKind, TraceEvent};

use crate::error::{OutputError, OutputResult};

/// Writes every [`TraceEvent`] and summary row to two CSV files in a target
/// directory. `EventSink`'s methods have no return value, so write failures
/// are stashed and surfaced later with [`CsvEventSink::take_error`].
pub struct CsvEventSink {
    events: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
    last_error: Option<OutputError>,
}

impl CsvEventSink {
    /// Opens (or creates) `events.csv` and `summaries.csv` in `dir` and
    /// writes their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["id", "t", "x", "y", "z", "kind"])?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(["id", "t_in", "t_park", "t_arrive", "cost"])?;

        Ok(Self { events, summaries, finished: false, last_error: None })
    }

    /// Takes the first stored write error, if any, clearing it.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: Result<(), csv::Error>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }

    /// Flushes both files. Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

impl EventSink for CsvEventSink {
    fn emit(&mut self, event: TraceEvent) {
        let kind = record_kind_char(event.kind).to_string();
        let result = self.events.write_record(&[event.id, event.t.to_string(), event.x.to_string(), event.y.to_string(), event.z.to_string(), kind]);
        self.store_err(result);
    }

    fn emit_summary(&mut self, id: &str, t_in: pk_core::SimTime, t_park: pk_core::SimTime, t_arrive: pk_core::SimTime, cost: i64) {
        let result = self
            .summaries
            .write_record(&[id.to_string(), t_in.to_string(), t_park.to_string(), t_arrive.to_string(), cost.to_string()]);
        self.store_err(result);
    }
}

fn record_kind_char(kind: RecordKind) -> char {
    kind.to_char()
}
