//! Park model: owns the grid, the compiled routing graph, the vehicle
//! registry, the per-floor spot counters, and the reusable Dijkstra scratch
//! state that `pk-route` drives.

use std::collections::HashMap;

use pk_core::{CellRole, GraphDims, NodeId, ParkError, ParkResult, TypeIndex};
use pk_graph::{IndexedMinHeap, WeightedDiGraph};

use crate::compiler::GraphCompiler;
use crate::grid::Grid;
use crate::registry::VehicleRegistry;

/// Sentinel weight meaning "no connection found yet".
pub const NOCON: i64 = i64::MAX;

pub struct ParkModel {
    grid: Grid,
    dims: GraphDims,
    graph: WeightedDiGraph,
    registry: VehicleRegistry,
    access_table: HashMap<char, TypeIndex>,
    ramps_by_floor: Vec<Vec<(usize, usize, usize)>>,
    avail_per_floor: Vec<i64>,
    available_total: i64,

    // Dijkstra scratch, reused query to query without a full re-zero.
    st: Vec<NodeId>,
    wt: Vec<i64>,
    heap: IndexedMinHeap,
}

impl ParkModel {
    /// Compiles `grid` into a routing graph and all derived bookkeeping.
    /// There is no incremental re-compile — restriction mutators only flip
    /// node activity, they never touch the edge set.
    pub fn build(grid: Grid) -> Self {
        let compiled = GraphCompiler::compile(&grid);
        let n = compiled.dims.node_count();
        let available_total: i64 = compiled.avail_per_floor.iter().sum();

        Self {
            grid,
            dims: compiled.dims,
            graph: compiled.graph,
            registry: VehicleRegistry::new(compiled.n_spots),
            access_table: compiled.access_table,
            ramps_by_floor: compiled.ramps_by_floor,
            avail_per_floor: compiled.avail_per_floor,
            available_total,
            st: vec![NodeId::NONE; n],
            wt: vec![NOCON; n],
            heap: IndexedMinHeap::new(n),
        }
    }

    #[inline]
    pub fn dims(&self) -> GraphDims {
        self.dims
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn graph(&self) -> &WeightedDiGraph {
        &self.graph
    }

    #[inline]
    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    /// The predecessor of `node` on the most recently computed path, or
    /// [`NodeId::NONE`] if it was never reached.
    #[inline]
    pub fn predecessor(&self, node: NodeId) -> NodeId {
        self.st[node.index()]
    }

    /// `node`'s path cost from the most recently computed query's root, or
    /// [`NOCON`] if unreached.
    #[inline]
    pub fn cost_to(&self, node: NodeId) -> i64 {
        self.wt[node.index()]
    }

    pub fn sink_for(&self, access_type: char) -> ParkResult<NodeId> {
        self.access_table
            .get(&access_type)
            .map(|&t| self.dims.sink(t))
            .ok_or(ParkError::UnknownAccessType(access_type))
    }

    /// Grants `pk-route` joint access to the graph (read) and the scratch
    /// arrays (write) it needs to run a query without re-borrowing `self`
    /// piecemeal.
    pub fn route_scratch(&mut self) -> (&Grid, &mut WeightedDiGraph, GraphDims, &mut Vec<NodeId>, &mut Vec<i64>, &mut IndexedMinHeap) {
        (&self.grid, &mut self.graph, self.dims, &mut self.st, &mut self.wt, &mut self.heap)
    }

    #[inline]
    pub fn available_total(&self) -> i64 {
        self.available_total
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.available_total == 0
    }

    /// Records that `vehicle_id` has parked at the drive-node predecessor
    /// found on the bridge edge of a computed path. Called by `pk-route`
    /// once a path has been accepted; does not itself run any search.
    pub fn occupy_spot(&mut self, vehicle_id: &str, drive_node: NodeId) {
        let (x, y, z) = self.dims.coords_of(drive_node);
        self.grid.set_role_at(x, y, z, CellRole::Occupied);
        self.graph.deactivate(drive_node);
        self.registry.insert(vehicle_id, drive_node);
        self.available_total -= 1;
        self.avail_per_floor[z] -= 1;
    }

    /// `restrict_cell(x,y,z)` — deactivate both node copies; if the cell
    /// was a free spot, decrement availability.
    pub fn restrict_cell(&mut self, x: usize, y: usize, z: usize) {
        if self.grid.role_at(x, y, z) == CellRole::Spot {
            self.available_total -= 1;
            self.avail_per_floor[z] -= 1;
        }
        self.graph.deactivate(self.dims.drive(x, y, z));
        self.graph.deactivate(self.dims.walk(x, y, z));
    }

    /// Inverse of [`Self::restrict_cell`].
    pub fn release_cell(&mut self, x: usize, y: usize, z: usize) {
        if self.grid.role_at(x, y, z) == CellRole::Spot {
            self.available_total += 1;
            self.avail_per_floor[z] += 1;
        }
        self.graph.activate(self.dims.drive(x, y, z));
        self.graph.activate(self.dims.walk(x, y, z));
    }

    /// `restrict_floor(z)` — deactivates every entrance and ramp node on
    /// floor `z` (ramps on both sides). `avail_per_floor[z]` is *not*
    /// zeroed, only the running total is decremented by its current value
    /// (see `DESIGN.md`'s Open Question decisions).
    pub fn restrict_floor(&mut self, z: usize) {
        for &(x, y, ez) in &self.grid.entrances {
            if ez == z {
                self.graph.deactivate(self.dims.drive(x, y, z));
            }
        }
        for &(x, y, _) in &self.ramps_by_floor[z] {
            self.graph.deactivate(self.dims.drive(x, y, z));
            self.graph.deactivate(self.dims.walk(x, y, z));
        }
        self.available_total -= self.avail_per_floor[z];
    }

    /// Inverse of [`Self::restrict_floor`].
    pub fn release_floor(&mut self, z: usize) {
        for &(x, y, ez) in &self.grid.entrances {
            if ez == z {
                self.graph.activate(self.dims.drive(x, y, z));
            }
        }
        for &(x, y, _) in &self.ramps_by_floor[z] {
            self.graph.activate(self.dims.drive(x, y, z));
            self.graph.activate(self.dims.walk(x, y, z));
        }
        self.available_total += self.avail_per_floor[z];
    }

    /// Reactivates the cell's drive-node, unconditionally, without
    /// consulting the registry: a coordinate-addressed departure for a spot
    /// nothing has parked in silently "frees" it anyway (see `DESIGN.md`'s
    /// Open Question decisions).
    pub fn clear_spot_by_coord(&mut self, x: usize, y: usize, z: usize) {
        self.graph.activate(self.dims.drive(x, y, z));
        self.grid.set_role_at(x, y, z, CellRole::Spot);
        self.available_total += 1;
        self.avail_per_floor[z] += 1;
    }

    /// Looks `vehicle_id` up in the registry, removes its entry, reactivates
    /// its node, and restores the cell to `.`. Returns the freed coordinates
    /// for the caller to build a departure trace record from. A second
    /// departure for the same id now reports `UnknownVehicle` rather than
    /// silently re-clearing an already-cleared spot.
    pub fn clear_spot_by_id(&mut self, vehicle_id: &str) -> ParkResult<(usize, usize, usize)> {
        let node = self
            .registry
            .remove(vehicle_id)
            .ok_or_else(|| ParkError::UnknownVehicle(vehicle_id.to_string()))?;
        self.graph.activate(node);
        let (x, y, z) = self.dims.coords_of(node);
        self.grid.set_role_at(x, y, z, CellRole::Spot);
        self.available_total += 1;
        self.avail_per_floor[z] += 1;
        Ok((x, y, z))
    }
}
