//! Event scheduler: merges arrival and restriction orders into one
//! time-ordered stream, then walks it applying map mutations, routing
//! arrivals, and draining the waiting queue under the look-ahead guard.

use log::{debug, warn};

use pk_core::SimTime;
use pk_map::ParkModel;
use pk_route::PathEngine;
use pk_schedule::{ArrivalRequest, OrderStream, RestrictionScope, RestrictionWindow, ScheduledOrder, VehicleOrder, WaitingQueue};
use pk_trace::{emit_after_in, emit_full, parked_node, EventSink, RecordKind, TraceEvent};

use crate::config::RunConfig;
use crate::error::SimResult;

/// Outcome of attempting to route one arrival (fresh or deferred).
enum RouteAttempt {
    Served,
    Unreachable,
    /// The order's access type is not in the config's dictionary and
    /// [`RunConfig`] says to skip rather than abort; the order is dropped,
    /// nothing is emitted, and it never returns to the waiting queue.
    Skipped,
}

/// Owns the park model and waiting queue and drives the merged order stream
/// end to end. Construct with [`Scheduler::new`], then call [`Scheduler::run`]
/// once with the full order lists.
pub struct Scheduler {
    model: ParkModel,
    waiting: WaitingQueue,
    config: RunConfig,
}

impl Scheduler {
    pub fn new(model: ParkModel) -> Self {
        Self { model, waiting: WaitingQueue::new(), config: RunConfig::default() }
    }

    pub fn with_config(model: ParkModel, config: RunConfig) -> Self {
        Self { model, waiting: WaitingQueue::new(), config }
    }

    #[inline]
    pub fn model(&self) -> &ParkModel {
        &self.model
    }

    #[inline]
    pub fn waiting_queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Runs the merged `vehicle_orders`/`restriction_windows` stream to
    /// completion, emitting every trace record to `sink`. Vehicles still in
    /// the waiting queue when the stream is exhausted are left unserved
    /// (vehicles never get the chance to complete their route).
    pub fn run(
        &mut self,
        vehicle_orders: Vec<VehicleOrder>,
        restriction_windows: Vec<RestrictionWindow>,
        sink: &mut dyn EventSink,
    ) -> SimResult<()> {
        let mut stream = OrderStream::merge(vehicle_orders, restriction_windows);

        while let Some((t, order)) = stream.next() {
            match order {
                ScheduledOrder::RestrictionApply(scope) => {
                    self.apply_restriction(t, scope, sink);
                    // No retry phase after an apply — applying a restriction never frees a spot.
                }
                ScheduledOrder::RestrictionRelease(scope) => {
                    self.release_restriction(t, scope, sink);
                    if !stream.next_is_same_time_mutation(t) {
                        self.drain_waiting_queue(t, sink)?;
                    }
                }
                ScheduledOrder::DepartureByCoord { x, y, z } => {
                    self.model.clear_spot_by_coord(x, y, z);
                    debug!("departure-by-coord at t={t} ({x},{y},{z})");
                    sink.emit(TraceEvent { id: String::new(), t, x, y, z, kind: RecordKind::Restriction });
                    if !stream.next_is_same_time_mutation(t) {
                        self.retry_single(t, sink)?;
                    }
                }
                ScheduledOrder::DepartureById { id } => {
                    match self.model.clear_spot_by_id(&id) {
                        Ok((x, y, z)) => {
                            debug!("departure-by-id {id} at t={t} freed ({x},{y},{z})");
                            sink.emit(TraceEvent { id: id.clone(), t, x, y, z, kind: RecordKind::Restriction });
                        }
                        Err(e) => warn!("{e}"),
                    }
                    if !stream.next_is_same_time_mutation(t) {
                        self.retry_single(t, sink)?;
                    }
                }
                ScheduledOrder::Arrival(req) => self.handle_arrival(t, req, sink)?,
            }
        }
        Ok(())
    }

    fn apply_restriction(&mut self, t: SimTime, scope: RestrictionScope, sink: &mut dyn EventSink) {
        match scope {
            RestrictionScope::Cell { x, y, z } => self.model.restrict_cell(x, y, z),
            RestrictionScope::Floor { z } => self.model.restrict_floor(z),
        }
        debug!("restriction applied at t={t}: {scope:?}");
        self.emit_restriction_record(t, scope, sink);
    }

    fn release_restriction(&mut self, t: SimTime, scope: RestrictionScope, sink: &mut dyn EventSink) {
        match scope {
            RestrictionScope::Cell { x, y, z } => self.model.release_cell(x, y, z),
            RestrictionScope::Floor { z } => self.model.release_floor(z),
        }
        debug!("restriction released at t={t}: {scope:?}");
        self.emit_restriction_record(t, scope, sink);
    }

    fn emit_restriction_record(&self, t: SimTime, scope: RestrictionScope, sink: &mut dyn EventSink) {
        let (x, y, z) = match scope {
            RestrictionScope::Cell { x, y, z } => (x, y, z),
            RestrictionScope::Floor { z } => (0, 0, z),
        };
        sink.emit(TraceEvent { id: String::new(), t, x, y, z, kind: RecordKind::Restriction });
    }

    /// Arrival state machine: only attempts to route
    /// immediately when the waiting queue is empty and the park isn't full;
    /// otherwise (and on a failed immediate attempt) the vehicle is recorded
    /// as "in queue" and deferred.
    fn handle_arrival(&mut self, t: SimTime, req: ArrivalRequest, sink: &mut dyn EventSink) -> SimResult<()> {
        if self.waiting.is_empty() && !self.model.is_full() {
            match self.try_route(t, &req, sink)? {
                RouteAttempt::Served | RouteAttempt::Skipped => return Ok(()),
                RouteAttempt::Unreachable => {}
            }
        }
        let (x, y, z) = req.entrance;
        sink.emit(TraceEvent { id: req.id.clone(), t, x, y, z, kind: RecordKind::In });
        self.waiting.push_back(req);
        Ok(())
    }

    /// Drains the waiting queue while spots remain, for restriction-release
    /// handlers — releasing a floor may free many spots at once, so this
    /// keeps trying until the queue or the park runs out.
    fn drain_waiting_queue(&mut self, t: SimTime, sink: &mut dyn EventSink) -> SimResult<()> {
        while !self.waiting.is_empty() && !self.model.is_full() {
            let candidate = self.waiting.pop_front().expect("checked non-empty above");
            match self.try_route_deferred(t, &candidate, sink)? {
                RouteAttempt::Served | RouteAttempt::Skipped => continue,
                RouteAttempt::Unreachable => {
                    self.waiting.push_front(candidate);
                    break;
                }
            }
        }
        Ok(())
    }

    /// A single retry attempt, for departure handlers: only one vehicle is
    /// pulled off the queue per departure, not a full drain.
    fn retry_single(&mut self, t: SimTime, sink: &mut dyn EventSink) -> SimResult<()> {
        if self.waiting.is_empty() || self.model.is_full() {
            return Ok(());
        }
        let candidate = self.waiting.pop_front().expect("checked non-empty above");
        match self.try_route_deferred(t, &candidate, sink)? {
            RouteAttempt::Served | RouteAttempt::Skipped => {}
            RouteAttempt::Unreachable => self.waiting.push_front(candidate),
        }
        Ok(())
    }

    /// Routes a fresh arrival and, on success, emits the full `i, m, e, p, a,
    /// x` sequence timestamped from `t` (the request time).
    fn try_route(&mut self, t: SimTime, req: &ArrivalRequest, sink: &mut dyn EventSink) -> SimResult<RouteAttempt> {
        let sink_node = match self.model.sink_for(req.access_type) {
            Ok(n) => n,
            Err(e) => return self.handle_unknown_access_type(req, e),
        };
        let (ex, ey, ez) = req.entrance;
        let origin = self.model.dims().drive(ex, ey, ez);
        let outcome = self.model.shortest_path(origin, sink_node);
        if !outcome.reached {
            return Ok(RouteAttempt::Unreachable);
        }
        let spot = parked_node(&self.model, origin, sink_node);
        self.model.occupy_spot(&req.id, spot);
        emit_full(sink, &self.model, &req.id, t, origin, sink_node);
        Ok(RouteAttempt::Served)
    }

    /// Routes a previously deferred arrival and, on success, emits the
    /// `m, e, p, a, x` sequence (no `i` — already emitted while waiting)
    /// timestamped from `serve_time`, with the summary cost carrying the
    /// waiting penalty.
    fn try_route_deferred(&mut self, serve_time: SimTime, req: &ArrivalRequest, sink: &mut dyn EventSink) -> SimResult<RouteAttempt> {
        let sink_node = match self.model.sink_for(req.access_type) {
            Ok(n) => n,
            Err(e) => return self.handle_unknown_access_type(req, e),
        };
        let (ex, ey, ez) = req.entrance;
        let origin = self.model.dims().drive(ex, ey, ez);
        let outcome = self.model.shortest_path(origin, sink_node);
        if !outcome.reached {
            return Ok(RouteAttempt::Unreachable);
        }
        let spot = parked_node(&self.model, origin, sink_node);
        self.model.occupy_spot(&req.id, spot);
        emit_after_in(sink, &self.model, &req.id, req.t_request, serve_time, origin, sink_node);
        Ok(RouteAttempt::Served)
    }

    fn handle_unknown_access_type(&self, req: &ArrivalRequest, e: pk_core::ParkError) -> SimResult<RouteAttempt> {
        if self.config.aborts_on_unknown_access_type() {
            return Err(e.into());
        }
        warn!("skipping arrival {}: {e}", req.id);
        Ok(RouteAttempt::Skipped)
    }
}
