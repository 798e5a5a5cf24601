//! `pk-schedule` — order records, the time-ordered merge stream, and the
//! FIFO waiting queue the event scheduler in `pk-sim` drives.

pub mod merge;
pub mod order;
pub mod waiting_queue;

#[cfg(test)]
mod tests;

pub use merge::{OrderStream, ScheduledOrder};
pub use order::{ArrivalRequest, RestrictionScope, RestrictionWindow, VehicleOrder};
pub use waiting_queue::WaitingQueue;
