//! Predecessor-chain walker: walks a completed path backwards from its sink
//! node, identifying the drive→walk bridge as the unique adjacent pair in
//! the path whose raw id delta equals `N*M*P`.
//!
//! Every record's timestamp is `base_time + cost_to(node)` — the Dijkstra
//! cost array `pk-route` leaves behind already *is* the elapsed-time curve
//! along the path, so no separate per-edge tick bookkeeping is needed here.

use pk_core::{GraphDims, NodeId, NodeKind, SimTime};
use pk_map::ParkModel;

use crate::event::{EventSink, RecordKind, TraceEvent};

/// Walks `origin..dest` (a path already computed by `pk-route` and left in
/// `model`'s scratch state) and emits the full `i, m, e, p, a, x` sequence,
/// with `i` timestamped at `request_time`.
pub fn emit_full(sink: &mut dyn EventSink, model: &ParkModel, id: &str, request_time: SimTime, origin: NodeId, dest: NodeId) {
    run(sink, model, id, origin, dest, request_time, request_time, true);
}

/// Same as [`emit_full`] but omits the `i` record (already emitted while the
/// vehicle waited in the queue) and times every record from `serve_time`
/// instead of `request_time`. The summary's reported cost still carries the
/// waiting penalty, since it is computed as `t_arrive - request_time`.
pub fn emit_after_in(
    sink: &mut dyn EventSink,
    model: &ParkModel,
    id: &str,
    request_time: SimTime,
    serve_time: SimTime,
    origin: NodeId,
    dest: NodeId,
) {
    run(sink, model, id, origin, dest, serve_time, request_time, false);
}

/// Returns the drive-node of the spot a computed `origin..dest` path parks
/// at, without emitting anything. Callers (`pk-sim`) use this to occupy the
/// spot in the park model *before* handing the path to [`emit_full`] /
/// [`emit_after_in`], since those functions only read already-computed state.
pub fn parked_node(model: &ParkModel, origin: NodeId, dest: NodeId) -> NodeId {
    let dims = model.dims();
    let path = walk_back(model, origin, dest);
    let bridge_idx = find_bridge(dims, &path).unwrap_or(path.len().saturating_sub(2));
    path[bridge_idx]
}

fn run(
    sink: &mut dyn EventSink,
    model: &ParkModel,
    id: &str,
    origin: NodeId,
    dest: NodeId,
    base_time: SimTime,
    summary_t_in: SimTime,
    emit_in: bool,
) {
    let dims = model.dims();
    let path = walk_back(model, origin, dest);
    debug_assert_eq!(path[0], origin);
    debug_assert_eq!(*path.last().unwrap(), dest);

    let event_time = |node: NodeId| base_time + SimTime(model.cost_to(node));

    if emit_in {
        let (x, y, z) = coords(dims, origin);
        sink.emit(TraceEvent { id: id.to_string(), t: event_time(origin), x, y, z, kind: RecordKind::In });
    }

    let bridge_idx = find_bridge(dims, &path).unwrap_or(path.len().saturating_sub(2));
    let drive_segment = &path[..=bridge_idx];
    let walk_segment = &path[bridge_idx + 1..path.len() - 1]; // excludes the trailing sink node

    emit_turns(sink, model, id, dims, drive_segment, RecordKind::DriveTurn, &event_time);

    let park_node = path[bridge_idx];
    let (px, py, pz) = coords(dims, park_node);
    let t_park = event_time(park_node);
    sink.emit(TraceEvent { id: id.to_string(), t: t_park, x: px, y: py, z: pz, kind: RecordKind::Park });

    emit_turns(sink, model, id, dims, walk_segment, RecordKind::WalkTurn, &event_time);

    let access_node = walk_segment.last().copied().unwrap_or(park_node);
    let (ax, ay, az) = coords(dims, access_node);
    let t_arrive = event_time(dest);
    sink.emit(TraceEvent { id: id.to_string(), t: t_arrive, x: ax, y: ay, z: az, kind: RecordKind::Arrive });

    let cost = t_arrive.get() - summary_t_in.get();
    sink.emit_summary(id, summary_t_in, t_park, t_arrive, cost);
}

/// Follows `model`'s predecessor array from `dest` back to `origin` and
/// returns the forward (origin-first) path.
fn walk_back(model: &ParkModel, origin: NodeId, dest: NodeId) -> Vec<NodeId> {
    let mut path = vec![dest];
    let mut cur = dest;
    while cur != origin {
        let pred = model.predecessor(cur);
        debug_assert!(!pred.is_none(), "reconstructing an unreached path");
        path.push(pred);
        cur = pred;
    }
    path.reverse();
    path
}

/// The first adjacent pair whose raw id delta is the drive/walk bridge
/// offset; its lower index is the last drive node.
fn find_bridge(dims: GraphDims, path: &[NodeId]) -> Option<usize> {
    path.windows(2).position(|w| dims.is_drive_walk_bridge(w[0], w[1]))
}

/// Emits a turn record at every interior node of `segment` where the
/// direction of travel changes, skipping nodes adjacent to a vertical ramp
/// edge (a floor change is not a turn). If `segment` has no interior turns,
/// a synthetic record is emitted at its second node.
fn emit_turns(
    sink: &mut dyn EventSink,
    model: &ParkModel,
    id: &str,
    dims: GraphDims,
    segment: &[NodeId],
    kind: RecordKind,
    event_time: &dyn Fn(NodeId) -> SimTime,
) {
    if segment.len() < 2 {
        return;
    }

    let mut found_any = false;
    for i in 1..segment.len() - 1 {
        let prev = coords(dims, segment[i - 1]);
        let cur = coords(dims, segment[i]);
        let next = coords(dims, segment[i + 1]);
        if prev.2 != cur.2 || cur.2 != next.2 {
            // One of the adjacent edges is a vertical ramp hop, not a turn.
            continue;
        }
        let in_dir = (cur.0 as isize - prev.0 as isize, cur.1 as isize - prev.1 as isize);
        let out_dir = (next.0 as isize - cur.0 as isize, next.1 as isize - cur.1 as isize);
        if in_dir != out_dir {
            found_any = true;
            let (x, y, z) = cur;
            sink.emit(TraceEvent { id: id.to_string(), t: event_time(segment[i]), x, y, z, kind });
        }
    }

    if !found_any && segment.len() > 1 {
        let (x, y, z) = coords(dims, segment[1]);
        sink.emit(TraceEvent { id: id.to_string(), t: event_time(segment[1]), x, y, z, kind });
    }
}

/// Decodes a drive or walk node's cell coordinates. Callers never pass a
/// sink node here — the sink's own arrival record uses the access cell's
/// coordinates instead.
fn coords(dims: GraphDims, node: NodeId) -> (usize, usize, usize) {
    match dims.kind_of(node) {
        NodeKind::Drive { x, y, z } | NodeKind::Walk { x, y, z } => (x, y, z),
        NodeKind::Sink { .. } => unreachable!("trace coordinates requested for a sink node"),
    }
}
