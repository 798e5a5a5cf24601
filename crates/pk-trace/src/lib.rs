//! `pk-trace` — reconstructs a Dijkstra predecessor chain into the ordered
//! `i, m, e, p, a, x` event sequence a completed vehicle route produces.

pub mod event;
pub mod reconstruct;


pub use event::{EventSink, RecordKind, TraceEvent};
pub use reconstruct::{emit_after_in, emit_full, parked_node};
