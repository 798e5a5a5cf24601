//! Time-ordered merge of vehicle and restriction orders into one stream.
//! The look-ahead predicate [`OrderStream::next_is_same_time_mutation`] lets
//! the four call sites in `pk-sim`'s scheduler (cell release, floor release,
//! departure-by-coord, departure-by-id) share one check instead of
//! repeating it.

use pk_core::SimTime;

use crate::order::{RestrictionScope, RestrictionWindow, VehicleOrder};

/// One merged order, independent of which input stream it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduledOrder {
    RestrictionApply(RestrictionScope),
    RestrictionRelease(RestrictionScope),
    DepartureByCoord { x: usize, y: usize, z: usize },
    DepartureById { id: String },
    Arrival(crate::order::ArrivalRequest),
}

impl ScheduledOrder {
    /// Tie-break tier for equal-time orders: restriction orders are
    /// processed before departures, and departures before arrivals.
    fn tier(&self) -> u8 {
        match self {
            ScheduledOrder::RestrictionApply(_) | ScheduledOrder::RestrictionRelease(_) => 0,
            ScheduledOrder::DepartureByCoord { .. } | ScheduledOrder::DepartureById { .. } => 1,
            ScheduledOrder::Arrival(_) => 2,
        }
    }

    /// `true` for the order classes the look-ahead guard groups together:
    /// every non-arrival order (restriction apply, restriction release,
    /// departure-by-coord, departure-by-id).
    fn is_mutation(&self) -> bool {
        !matches!(self, ScheduledOrder::Arrival(_))
    }
}

struct Timed {
    t: SimTime,
    order: ScheduledOrder,
}

/// The merged, time-ordered sequence of orders the scheduler (pk-sim) drives.
/// Built once from the full vehicle-order and restriction-window lists;
/// consumed front to back.
pub struct OrderStream {
    entries: Vec<Timed>,
    cursor: usize,
}

impl OrderStream {
    /// Merges `vehicle_orders` and `restriction_windows` (each may be in any
    /// order; the merge step itself establishes the non-decreasing-time,
    /// tiered ordering the scheduler requires) into one stream.
    pub fn merge(vehicle_orders: Vec<VehicleOrder>, restriction_windows: Vec<RestrictionWindow>) -> Self {
        let mut entries = Vec::with_capacity(vehicle_orders.len() + restriction_windows.len() * 2);

        for v in vehicle_orders {
            let t = v.time();
            let order = match v {
                VehicleOrder::Arrival(req) => ScheduledOrder::Arrival(req),
                VehicleOrder::DepartureByCoord { x, y, z, .. } => ScheduledOrder::DepartureByCoord { x, y, z },
                VehicleOrder::DepartureById { id, .. } => ScheduledOrder::DepartureById { id },
            };
            entries.push(Timed { t, order });
        }

        for w in restriction_windows {
            entries.push(Timed { t: w.t_a, order: ScheduledOrder::RestrictionApply(w.scope) });
            if w.t_b >= w.t_a {
                entries.push(Timed { t: w.t_b, order: ScheduledOrder::RestrictionRelease(w.scope) });
            }
        }

        // Stable sort: entries that tie on (time, tier) keep their relative
        // insertion order (all vehicle orders first in their given order,
        // then restriction orders in their given order — matching the
        // "apply before release of the same window" and
        // "earlier V-line before later V-line" expectations).
        entries.sort_by(|a, b| a.t.cmp(&b.t).then_with(|| a.order.tier().cmp(&b.order.tier())));

        Self { entries, cursor: 0 }
    }

    /// Removes and returns the next `(time, order)` pair, or `None` once the
    /// stream is exhausted.
    pub fn next(&mut self) -> Option<(SimTime, ScheduledOrder)> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        // Orders are taken by value out of `entries` via index + move; since
        // we only ever advance forward, swap_remove from the front would
        // disturb ordering, so take by index and bump the cursor instead.
        let Timed { t, order } = std::mem::replace(
            &mut self.entries[self.cursor],
            Timed { t: SimTime::ZERO, order: ScheduledOrder::DepartureById { id: String::new() } },
        );
        self.cursor += 1;
        Some((t, order))
    }

    /// `true` if the next order in the stream (not yet consumed) shares
    /// `current_time` and is a non-arrival order — the look-ahead guard a
    /// release/departure handler checks before attempting to retry the
    /// waiting queue.
    pub fn next_is_same_time_mutation(&self, current_time: SimTime) -> bool {
        match self.entries.get(self.cursor) {
            Some(next) => next.t == current_time && next.order.is_mutation(),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cursor >= self.entries.len()
    }
}
