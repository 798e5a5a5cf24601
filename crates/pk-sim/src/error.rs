//! Top-level scheduler error, wrapping `pk_core::ParkError`.

use pk_core::ParkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// A fatal `ParkError` escaped the scheduler. `Unreachable` and
    /// `ParkFull` never reach here — the scheduler recovers both internally;
    /// only `BadConfig`, `UnknownAccessType` (when
    /// [`crate::RunConfig::abort_on_unknown_access_type`] is set) and
    /// `GraphNotBuilt` can appear.
    #[error(transparent)]
    Park(#[from] ParkError),
}

pub type SimResult<T> = Result<T, SimError>;
