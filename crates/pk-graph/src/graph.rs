//! Weighted directed graph with per-node activation.
//!
//! Edges are never removed once compiled; restrictions are modelled purely
//! by flipping a node's `active` flag, which the shortest-path engine treats
//! as "no outgoing edges, unreachable as a destination".

use pk_core::NodeId;

#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub to: NodeId,
    pub weight: i64,
}

pub struct WeightedDiGraph {
    adj: Vec<Vec<Edge>>,
    active: Vec<bool>,
}

impl WeightedDiGraph {
    pub fn new(n: usize) -> Self {
        Self { adj: vec![Vec::new(); n], active: vec![true; n] }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn insert_edge(&mut self, u: NodeId, v: NodeId, weight: i64) {
        self.adj[u.index()].push(Edge { to: v, weight });
    }

    #[inline]
    pub fn out_edges(&self, n: NodeId) -> &[Edge] {
        &self.adj[n.index()]
    }

    #[inline]
    pub fn activate(&mut self, n: NodeId) {
        self.active[n.index()] = true;
    }

    #[inline]
    pub fn deactivate(&mut self, n: NodeId) {
        self.active[n.index()] = false;
    }

    #[inline]
    pub fn is_active(&self, n: NodeId) -> bool {
        self.active[n.index()]
    }
}
