//! Order record types.
//!
//! A vehicle order arrives as one of two overloaded line shapes: six fields
//! after an id and timestamp, or just an id and timestamp. The six-field
//! form branches on an access-type token: the literal `'S'` sentinel means
//! "departure by coordinate" (`(x,y,z)` is the spot to free, not an
//! entrance), any other character is a real access-type request for an
//! arrival at entrance `(x,y,z)`. The short form is always departure-by-id.
//! [`VehicleOrder`] keeps that same three-way split as a proper enum instead
//! of an overloaded character field.

use pk_core::SimTime;

/// One vehicle arriving at an entrance and requesting a pedestrian access
/// point of a given type. Also the shape the waiting queue holds while
/// a vehicle is deferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalRequest {
    pub id: String,
    /// The order's original request time — preserved across deferral so the
    /// waiting-cost rule can compute `t_serve - t_request`.
    pub t_request: SimTime,
    pub entrance: (usize, usize, usize),
    pub access_type: char,
}

/// One vehicle order, split into its three shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VehicleOrder {
    /// `V <id> <t> <type> <x> <y> <z>` with `type != 'S'`.
    Arrival(ArrivalRequest),
    /// `V <id> <t> S <x> <y> <z>` — free the spot at `(x,y,z)` directly,
    /// independent of the vehicle registry.
    DepartureByCoord { t: SimTime, x: usize, y: usize, z: usize },
    /// `V <id> <t>` — free the spot registered to `id`.
    DepartureById { id: String, t: SimTime },
}

impl VehicleOrder {
    pub fn time(&self) -> SimTime {
        match self {
            VehicleOrder::Arrival(a) => a.t_request,
            VehicleOrder::DepartureByCoord { t, .. } => *t,
            VehicleOrder::DepartureById { t, .. } => *t,
        }
    }
}

/// What a [`RestrictionWindow`] deactivates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RestrictionScope {
    Cell { x: usize, y: usize, z: usize },
    Floor { z: usize },
}

/// A cell- or floor-scoped restriction window. Expanded by
/// `pk-schedule::merge` into an apply order at `t_a` and, only if
/// `t_b >= t_a`, a release order at `t_b` — a window with `t_b < t_a` never
/// releases.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RestrictionWindow {
    pub t_a: SimTime,
    pub t_b: SimTime,
    pub scope: RestrictionScope,
}
