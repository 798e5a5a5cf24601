//! Unit tests for the CSV and in-memory event sinks.

use std::fs;

use pk_core::SimTime;
use pk_trace::{EventSink, RecordKind, TraceEvent};

use crate::{CsvEventSink, InMemorySink};

fn sample_event(id: &str, t: i64, kind: RecordKind) -> TraceEvent {
    TraceEvent { id: id.to_string(), t: SimTime(t), x: 1, y: 2, z: 0, kind }
}

#[test]
fn in_memory_sink_collects_events_and_summaries_in_order() {
    let mut sink = InMemorySink::new();
    sink.emit(sample_event("v1", 0, RecordKind::In));
    sink.emit(sample_event("v1", 4, RecordKind::Arrive));
    sink.emit_summary("v1", SimTime(0), SimTime(1), SimTime(4), 4);

    assert_eq!(sink.events().len(), 2);
    assert_eq!(sink.events()[0].kind, RecordKind::In);
    assert_eq!(sink.summaries(), &[("v1".to_string(), SimTime(0), SimTime(1), SimTime(4), 4)]);
}

#[test]
fn csv_sink_writes_header_and_rows_to_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = CsvEventSink::new(dir.path()).unwrap();

    sink.emit(sample_event("v1", 0, RecordKind::In));
    sink.emit_summary("v1", SimTime(0), SimTime(1), SimTime(4), 4);
    sink.finish().unwrap();
    assert!(sink.take_error().is_none());

    let events_csv = fs::read_to_string(dir.path().join("events.csv")).unwrap();
    assert!(events_csv.starts_with("id,t,x,y,z,kind\n"));
    assert!(events_csv.contains("v1,0,1,2,0,i\n"));

    let summaries_csv = fs::read_to_string(dir.path().join("summaries.csv")).unwrap();
    assert!(summaries_csv.starts_with("id,t_in,t_park,t_arrive,cost\n"));
    assert!(summaries_csv.contains("v1,0,1,4,4\n"));
}

#[test]
fn csv_sink_finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = CsvEventSink::new(dir.path()).unwrap();
    sink.finish().unwrap();
    sink.finish().unwrap();
}
