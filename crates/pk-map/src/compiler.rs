//! Single-pass graph compiler: turns a static [`Grid`] into a routing graph.
//!
//! Neighbour admissibility is read off the per-role predicates in
//! `pk_core::role` (`drives_out`/`drivable_dest`/`walks_out`/`walkable_dest`)
//! uniformly across roles, rather than a per-role exclusion set that would
//! forbid, e.g., a ramp from ever connecting laterally to an adjacent spot
//! while a driveway may — one admissibility table shared by every role.

use std::collections::HashMap;

use pk_core::{CellRole, GraphDims, NodeId, TypeIndex};
use pk_graph::WeightedDiGraph;

use crate::grid::Grid;

const DRIVE_WEIGHT: i64 = 1;
const WALK_WEIGHT: i64 = 3;
const RAMP_DRIVE_WEIGHT: i64 = 2;
const RAMP_WALK_WEIGHT: i64 = 6;
const BRIDGE_WEIGHT: i64 = 0;
const SINK_WEIGHT: i64 = 0;

/// Everything the compiler produces from a [`Grid`], beyond the graph
/// itself: the data `pk-map::ParkModel` needs to run restriction mutators
/// and arrival routing without rescanning the grid.
pub struct Compiled {
    pub dims: GraphDims,
    pub graph: WeightedDiGraph,
    /// Ramp cell coordinates grouped by floor, used by `restrict_floor`.
    pub ramps_by_floor: Vec<Vec<(usize, usize, usize)>>,
    /// Number of free (`.`) spot cells per floor at compile time.
    pub avail_per_floor: Vec<i64>,
    /// Total number of spot cells (free or occupied), used as the vehicle
    /// registry's bucket count.
    pub n_spots: usize,
    /// Distinct access types, indexed in discovery order.
    pub access_table: HashMap<char, TypeIndex>,
}

pub struct GraphCompiler;

impl GraphCompiler {
    pub fn compile(grid: &Grid) -> Compiled {
        let mut access_table = HashMap::new();
        for ap in &grid.access_points {
            let next = TypeIndex(access_table.len() as u16);
            access_table.entry(ap.access_type).or_insert(next);
        }
        let t = access_table.len();
        let dims = GraphDims::new(grid.dims.n, grid.dims.m, grid.dims.p, t);

        let mut graph = WeightedDiGraph::new(dims.node_count());
        let mut ramps_by_floor = vec![Vec::new(); dims.p];
        let mut avail_per_floor = vec![0i64; dims.p];
        let mut n_spots = 0usize;
        let mut initially_occupied = Vec::new();

        for z in 0..dims.p {
            for y in 0..dims.m {
                for x in 0..dims.n {
                    let role = grid.role_at(x, y, z);
                    Self::wire_cell(grid, dims, &mut graph, x, y, z, role);

                    if role.is_ramp() {
                        ramps_by_floor[z].push((x, y, z));
                    }
                    if role.is_spot_like() {
                        n_spots += 1;
                        avail_per_floor[z] += 1;
                        if role == CellRole::Occupied {
                            initially_occupied.push(dims.drive(x, y, z));
                        }
                    }
                }
            }
        }

        for &node in &grid.entrances {
            Self::wire_entrance(grid, dims, &mut graph, node);
        }

        for ap in &grid.access_points {
            let walk = dims.walk(ap.x, ap.y, ap.z);
            let sink = dims.sink(access_table[&ap.access_type]);
            graph.insert_edge(walk, sink, SINK_WEIGHT);
        }

        // Occupied spots start deactivated on the drive side only; the walk
        // side stays usable so a pre-seated occupant could, in principle,
        // still be routed out on foot.
        for node in initially_occupied {
            graph.deactivate(node);
        }

        Compiled { dims, graph, ramps_by_floor, avail_per_floor, n_spots, access_table }
    }

    fn wire_cell(grid: &Grid, dims: GraphDims, graph: &mut WeightedDiGraph, x: usize, y: usize, z: usize, role: CellRole) {
        let drive = dims.drive(x, y, z);
        let walk = dims.walk(x, y, z);

        if role.drives_out() {
            for (nx, ny, nz) in grid.neighbours(x, y, z) {
                if grid.role_at(nx, ny, nz).drivable_dest() {
                    graph.insert_edge(drive, dims.drive(nx, ny, nz), DRIVE_WEIGHT);
                }
            }
        }
        if role.walks_out() {
            for (nx, ny, nz) in grid.neighbours(x, y, z) {
                if grid.role_at(nx, ny, nz).walkable_dest() {
                    graph.insert_edge(walk, dims.walk(nx, ny, nz), WALK_WEIGHT);
                }
            }
        }
        match role {
            CellRole::RampUp => {
                graph.insert_edge(drive, dims.drive(x, y, z + 1), RAMP_DRIVE_WEIGHT);
                graph.insert_edge(walk, dims.walk(x, y, z + 1), RAMP_WALK_WEIGHT);
            }
            CellRole::RampDown => {
                graph.insert_edge(drive, dims.drive(x, y, z - 1), RAMP_DRIVE_WEIGHT);
                graph.insert_edge(walk, dims.walk(x, y, z - 1), RAMP_WALK_WEIGHT);
            }
            CellRole::Spot | CellRole::Occupied => {
                graph.insert_edge(drive, walk, BRIDGE_WEIGHT);
            }
            _ => {}
        }
    }

    /// One-way drive edge from an entrance into the unique inner neighbour
    /// dictated by which outer wall it sits on.
    fn wire_entrance(grid: &Grid, dims: GraphDims, graph: &mut WeightedDiGraph, (x, y, z): (usize, usize, usize)) {
        let drive = dims.drive(x, y, z);
        if x == 0 {
            graph.insert_edge(drive, dims.drive(x + 1, y, z), DRIVE_WEIGHT);
        }
        if x == grid.dims.n - 1 {
            graph.insert_edge(drive, dims.drive(x - 1, y, z), DRIVE_WEIGHT);
        }
        if y == 0 {
            graph.insert_edge(drive, dims.drive(x, y + 1, z), DRIVE_WEIGHT);
        }
        if y == grid.dims.m - 1 {
            graph.insert_edge(drive, dims.drive(x, y - 1, z), DRIVE_WEIGHT);
        }
    }
}
