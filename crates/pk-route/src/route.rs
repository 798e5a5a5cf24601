//! Ramp-constrained Dijkstra: a ramp cell reached from a non-ramp
//! predecessor may only relax its vertical neighbour; ramp-to-ramp chaining
//! permits lateral relaxation as usual.

use pk_core::{CellRole, GraphDims, NodeId, NodeKind};
use pk_graph::WeightedDiGraph;
use pk_map::{ParkModel, NOCON};

/// Outcome of a single shortest-path query.
#[derive(Copy, Clone, Debug)]
pub struct RouteOutcome {
    pub cost: i64,
    pub reached: bool,
}

/// Runs Dijkstra from `origin` to `dest` over a park model's compiled
/// graph and scratch state, leaving the predecessor/weight arrays ready for
/// `pk-trace` to walk.
pub trait PathEngine {
    fn shortest_path(&mut self, origin: NodeId, dest: NodeId) -> RouteOutcome;
}

impl PathEngine for ParkModel {
    fn shortest_path(&mut self, origin: NodeId, dest: NodeId) -> RouteOutcome {
        let (grid, graph, dims, st, wt, heap) = self.route_scratch();

        // Reuse of scratch state: only entries the previous query actually
        // touched are restored, not the whole array.
        heap.reset(st, wt, NOCON);
        wt[origin.index()] = 0;
        heap.decrease_or_update(origin, wt);

        while let Some(popped) = heap.extract_min(wt) {
            if !graph.is_active(popped) {
                continue;
            }
            if popped == dest || wt[popped.index()] == NOCON {
                break;
            }

            if let Some(role) = cell_role_of(grid, dims, popped) {
                if role.is_ramp() {
                    relax_ramp(graph, dims, grid, st, wt, heap, popped);
                    continue;
                }
            }
            relax_all(graph, st, wt, heap, popped);
        }

        RouteOutcome { cost: wt[dest.index()], reached: st[dest.index()] != NodeId::NONE || origin == dest }
    }
}

/// `None` for sink nodes, which are never ramps.
fn cell_role_of(grid: &pk_map::Grid, dims: GraphDims, node: NodeId) -> Option<CellRole> {
    match dims.kind_of(node) {
        NodeKind::Drive { x, y, z } | NodeKind::Walk { x, y, z } => Some(grid.role_at(x, y, z)),
        NodeKind::Sink { .. } => None,
    }
}

fn relax_all(
    graph: &WeightedDiGraph,
    st: &mut [NodeId],
    wt: &mut [i64],
    heap: &mut pk_graph::IndexedMinHeap,
    u: NodeId,
) {
    for edge in graph.out_edges(u) {
        let candidate = wt[u.index()] + edge.weight;
        if wt[edge.to.index()] > candidate {
            wt[edge.to.index()] = candidate;
            st[edge.to.index()] = u;
            heap.reinsert(edge.to, wt);
        }
    }
}

/// A ramp cell, once entered from a non-ramp predecessor, only relaxes its
/// vertical neighbour — the driver is committed to the ramp. If the
/// predecessor was itself a ramp on the same column, lateral relaxation is
/// permitted (ramp-to-ramp chaining), matching `GDijkstra`'s distinction
/// between `e->w` deltas equal to a floor's cell count and everything else.
fn relax_ramp(
    graph: &WeightedDiGraph,
    dims: GraphDims,
    grid: &pk_map::Grid,
    st: &mut [NodeId],
    wt: &mut [i64],
    heap: &mut pk_graph::IndexedMinHeap,
    u: NodeId,
) {
    let predecessor = st[u.index()];
    let predecessor_is_ramp = if predecessor.is_none() {
        false
    } else {
        cell_role_of(grid, dims, predecessor).map(|r| r.is_ramp()).unwrap_or(false)
    };

    if predecessor_is_ramp {
        relax_all(graph, st, wt, heap, u);
        return;
    }

    let floor_span = dims.floor_cell_count() as i64;
    for edge in graph.out_edges(u) {
        let delta = edge.to.0 as i64 - u.0 as i64;
        if delta.abs() != floor_span {
            continue;
        }
        let candidate = wt[u.index()] + edge.weight;
        if wt[edge.to.index()] > candidate {
            wt[edge.to.index()] = candidate;
            st[edge.to.index()] = u;
            heap.reinsert(edge.to, wt);
        }
        break;
    }
}
