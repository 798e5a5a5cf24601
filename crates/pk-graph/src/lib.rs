//! `pk-graph` — the indexed min-heap and weighted directed graph the
//! shortest-path engine runs on.

pub mod graph;
pub mod heap;

#[cfg(test)]
mod tests;

pub use graph::{Edge, WeightedDiGraph};
pub use heap::IndexedMinHeap;
