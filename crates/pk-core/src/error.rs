//! Common error kind shared by every crate in the workspace.
//!
//! `Unreachable` and `ParkFull` are recovered internally by the scheduler
//! (`pk-sim`) as part of its normal loop and never escape `Scheduler::run` as
//! an `Err` — they are returned as a typed outcome of routing a single
//! vehicle. The remaining variants are fatal and propagate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkError {
    #[error("malformed configuration: {0}")]
    BadConfig(String),

    #[error("arrival requests unknown access type '{0}'")]
    UnknownAccessType(char),

    #[error("departure-by-id for vehicle {0} not in registry")]
    UnknownVehicle(String),

    #[error("no path from entrance {entrance} to any access of type '{access_type}'")]
    Unreachable { entrance: u32, access_type: char },

    #[error("park is full")]
    ParkFull,

    #[error("restriction mutator called before the graph was compiled")]
    GraphNotBuilt,
}

impl ParkError {
    /// `true` for the two kinds the scheduler recovers from internally
    /// rather than aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParkError::Unreachable { .. } | ParkError::ParkFull)
    }
}

pub type ParkResult<T> = Result<T, ParkError>;
