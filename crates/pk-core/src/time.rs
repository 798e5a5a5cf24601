//! Simulated time.
//!
//! This system is event-time, not tick-based: orders carry an arbitrary
//! non-negative timestamp and the scheduler advances strictly by jumping
//! from one order's timestamp to the next. There is no clock/tick
//! conversion to model.

use std::fmt;
use std::ops::{Add, Sub};

/// A point in simulated time, or a duration between two such points.
/// Orders, edge weights and path costs all share this type.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SimTime(pub i64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for SimTime {
    type Output = SimTime;
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl Sub for SimTime {
    type Output = SimTime;
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl From<i64> for SimTime {
    fn from(v: i64) -> Self {
        SimTime(v)
    }
}
