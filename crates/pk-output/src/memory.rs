//! In-memory [`EventSink`] for tests, demos, and embedding callers that want
//! the raw record list rather than files on disk.

use pk_core::SimTime;
use pk_trace::{EventSink, TraceEvent};

/// One completed vehicle's summary row: `(id, t_in, t_park, t_arrive, cost)`.
pub type SummaryRow = (String, SimTime, SimTime, SimTime, i64);

/// Collects every emitted [`TraceEvent`] and summary row in arrival order.
#[derive(Default)]
pub struct InMemorySink {
    events: Vec<TraceEvent>,
    summaries: Vec<SummaryRow>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn summaries(&self) -> &[SummaryRow] {
        &self.summaries
    }
}

impl EventSink for InMemorySink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    fn emit_summary(&mut self, id: &str, t_in: SimTime, t_park: SimTime, t_arrive: SimTime, cost: i64) {
        self.summaries.push((id.to_string(), t_in, t_park, t_arrive, cost));
    }
}
