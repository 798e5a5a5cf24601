//! Strongly typed node identifiers over the fused drive/walk/sink graph.
//!
//! # Node numbering
//!
//! A compiled routing graph has `2*N*M*P + T` nodes, laid out as three
//! disjoint ranges:
//!
//! ```text
//! [0,            N*M*P)          drive nodes, one per grid cell
//! [N*M*P,        2*N*M*P)        walk nodes, one per grid cell
//! [2*N*M*P,      2*N*M*P + T)    sink nodes, one per distinct access type
//! ```
//!
//! `NodeId` is a flat `u32` index into this space; `GraphDims` knows the
//! grid extents and distinct-type count and is the only place that knows how
//! to go from `(x, y, z)` / type index to `NodeId` and back. The Dijkstra
//! ramp-constraint check (`pk-route`) and the trace reconstructor
//! (`pk-trace`) both classify a popped/visited `NodeId` via
//! [`GraphDims::kind_of`] rather than re-deriving range arithmetic locally.

use std::fmt;

/// Index into the compiled routing graph. `u32` keeps per-node scratch
/// arrays (`wt`, `st`, heap position) compact for grids with millions of
/// cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no predecessor" / "not reached".
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(none)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Index of a distinct access type observed in the park configuration
/// (`type` char → small dense index, assigned in discovery order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TypeIndex(pub u16);

/// One of the three disjoint ranges a [`NodeId`] can fall in, with its
/// decoded coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    /// A car's position at grid cell `(x, y, z)`.
    Drive { x: usize, y: usize, z: usize },
    /// A pedestrian's position at grid cell `(x, y, z)`.
    Walk { x: usize, y: usize, z: usize },
    /// The synthetic "reached any access of this type" sink.
    Sink { type_index: TypeIndex },
}

/// Grid extents and distinct-access-type count; the sole authority for
/// mapping between `(x, y, z)` / type index and flat [`NodeId`]s.
#[derive(Copy, Clone, Debug)]
pub struct GraphDims {
    pub n: usize,
    pub m: usize,
    pub p: usize,
    /// Number of distinct access types in the park configuration.
    pub t: usize,
}

impl GraphDims {
    pub fn new(n: usize, m: usize, p: usize, t: usize) -> Self {
        Self { n, m, p, t }
    }

    /// Number of grid cells (`N*M*P`); also the offset between a drive node
    /// and its paired walk node.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.n * self.m * self.p
    }

    /// Number of cells in a single floor (`N*M`) — the node-id delta between
    /// a ramp cell and its vertical neighbour one floor up or down. Distinct
    /// from [`Self::cell_count`], which is the drive/walk bridge offset;
    /// conflating the two misidentifies ramp traversal in the trace
    /// reconstructor and the ramp-constrained relaxation rule.
    #[inline]
    pub fn floor_cell_count(self) -> usize {
        self.n * self.m
    }

    /// Total node count across all three ranges.
    #[inline]
    pub fn node_count(self) -> usize {
        2 * self.cell_count() + self.t
    }

    /// Flat cell index `x + N*y + N*M*z`, shared by the drive and walk node
    /// of the same cell (they differ by exactly [`Self::cell_count`]).
    #[inline]
    pub fn cell_index(self, x: usize, y: usize, z: usize) -> usize {
        x + self.n * y + self.n * self.m * z
    }

    #[inline]
    pub fn drive(self, x: usize, y: usize, z: usize) -> NodeId {
        NodeId(self.cell_index(x, y, z) as u32)
    }

    #[inline]
    pub fn walk(self, x: usize, y: usize, z: usize) -> NodeId {
        NodeId((self.cell_index(x, y, z) + self.cell_count()) as u32)
    }

    #[inline]
    pub fn sink(self, type_index: TypeIndex) -> NodeId {
        NodeId((2 * self.cell_count() + type_index.0 as usize) as u32)
    }

    /// `true` if `node` falls in the drive range.
    #[inline]
    pub fn is_drive(self, node: NodeId) -> bool {
        node.index() < self.cell_count()
    }

    /// `true` if `node` falls in the walk range.
    #[inline]
    pub fn is_walk(self, node: NodeId) -> bool {
        let c = self.cell_count();
        (c..2 * c).contains(&node.index())
    }

    /// Decode a drive or walk node's cell coordinates. Panics if `node` is a
    /// sink node — callers must check [`Self::kind_of`] first if the range
    /// is not already known.
    pub fn coords_of(self, node: NodeId) -> (usize, usize, usize) {
        let cell = if self.is_walk(node) {
            node.index() - self.cell_count()
        } else {
            node.index()
        };
        let z = cell / (self.n * self.m);
        let rem = cell % (self.n * self.m);
        let y = rem / self.n;
        let x = rem % self.n;
        (x, y, z)
    }

    /// Classify `node` into its range and decode its coordinates/type index.
    pub fn kind_of(self, node: NodeId) -> NodeKind {
        if self.is_drive(node) {
            let (x, y, z) = self.coords_of(node);
            NodeKind::Drive { x, y, z }
        } else if self.is_walk(node) {
            let (x, y, z) = self.coords_of(node);
            NodeKind::Walk { x, y, z }
        } else {
            let type_index = TypeIndex((node.index() - 2 * self.cell_count()) as u16);
            NodeKind::Sink { type_index }
        }
    }

    /// `true` if `a` and `b` are the drive/walk pair of the same cell
    /// (the "leave the car" bridge edge).
    #[inline]
    pub fn is_drive_walk_bridge(self, a: NodeId, b: NodeId) -> bool {
        let c = self.cell_count() as i64;
        (a.0 as i64 - b.0 as i64).abs() == c
    }
}
