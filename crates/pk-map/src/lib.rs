//! `pk-map` — park configuration, the vehicle registry, and the graph
//! compiler that turns a static grid into the routing graph `pk-route` runs
//! Dijkstra over.

pub mod compiler;
pub mod grid;
pub mod model;
pub mod registry;


pub use compiler::{Compiled, GraphCompiler};
pub use grid::{AccessPoint, Grid};
pub use model::{ParkModel, NOCON};
pub use registry::VehicleRegistry;
