//! `pk-core` — foundational types for the parking-lot router and scheduler.
//!
//! This crate is a dependency of every other `pk-*` crate. It has no `pk-*`
//! dependencies of its own, and only one external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module   | Contents                                     |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `NodeId`, `TypeIndex`, `NodeKind`, `GraphDims` |
//! | [`role`] | `CellRole` and its neighbour-admissibility table |
//! | [`time`] | `SimTime`                                     |
//! | [`error`]| `ParkError`, `ParkResult`                     |

pub mod error;
pub mod ids;
pub mod role;
pub mod time;

#[cfg(test)]
mod tests;

pub use error::{ParkError, ParkResult};
pub use ids::{GraphDims, NodeId, NodeKind, TypeIndex};
pub use role::CellRole;
pub use time::SimTime;
