//! Trace record types and the sink trait that consumes them. Every record
//! here is a required output, not an optional progress callback — a sink
//! implements both methods directly rather than opting into hooks.

use pk_core::SimTime;

/// The one-character event class of a [`TraceEvent`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RecordKind {
    /// `i` — vehicle instance recorded (either served immediately or placed
    /// in the waiting queue).
    In,
    /// `m` — direction change while on the drive side.
    DriveTurn,
    /// `e` — the drive→walk bridge, i.e. the car is parked.
    Park,
    /// `p` — direction change while on the walk side.
    WalkTurn,
    /// `a` — arrival at the requested access point.
    Arrive,
    /// `s` — a map restriction applied/released (blank id) or a vehicle's
    /// spot freed by departure (by id or by coordinate); both share the
    /// same one-character kind.
    Restriction,
}

impl RecordKind {
    pub fn to_char(self) -> char {
        match self {
            RecordKind::In => 'i',
            RecordKind::DriveTurn => 'm',
            RecordKind::Park => 'e',
            RecordKind::WalkTurn => 'p',
            RecordKind::Arrive => 'a',
            RecordKind::Restriction => 's',
        }
    }
}

/// One trace line: a vehicle (or, for [`RecordKind::Restriction`], a blank
/// id) at a point in time and space.
#[derive(Clone, Debug)]
pub struct TraceEvent {
    pub id: String,
    pub t: SimTime,
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub kind: RecordKind,
}

/// Consumer of the trace records a run produces. Line formatting — CSV, a
/// terminal, an in-memory buffer — is entirely the implementor's concern.
pub trait EventSink {
    fn emit(&mut self, event: TraceEvent);

    /// The `x` summary record: `(t_in, t_park, t_arrive, cost)` for one
    /// completed vehicle.
    fn emit_summary(&mut self, id: &str, t_in: SimTime, t_park: SimTime, t_arrive: SimTime, cost: i64);
}
