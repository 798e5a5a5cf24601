//! `pk-route` — the ramp-constrained Dijkstra shortest-path engine.

pub mod route;

#[cfg(test)]
mod tests;

pub use route::{PathEngine, RouteOutcome};
