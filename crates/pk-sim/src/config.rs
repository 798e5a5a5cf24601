//! Run-wide configuration: the one place a caller tunes behaviour the
//! scheduler itself leaves as a documented choice.

/// Whether an arrival requesting an access type absent from the config's
/// dictionary aborts the whole run or is skipped (logged, order dropped, no
/// record emitted). Defaults to skip, matching the scheduler's treatment of
/// the other two recoverable kinds (`Unreachable`, `ParkFull`).
#[derive(Copy, Clone, Debug, Default)]
pub struct RunConfig {
    abort_on_unknown_access_type: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches `UnknownAccessType` from skip-and-log to a fatal error that
    /// terminates [`crate::Scheduler::run`].
    pub fn abort_on_unknown_access_type(mut self) -> Self {
        self.abort_on_unknown_access_type = true;
        self
    }

    pub fn aborts_on_unknown_access_type(&self) -> bool {
        self.abort_on_unknown_access_type
    }
}
