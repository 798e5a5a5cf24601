//! `pk-sim` — the event scheduler: merges arrival and restriction
//! orders over simulated time, drives the park model (`pk-map`), the
//! shortest-path engine (`pk-route`), and the trace reconstructor
//! (`pk-trace`), and manages the waiting queue (`pk-schedule`).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pk_sim::Scheduler;
//! use pk_output::InMemorySink;
//!
//! let mut scheduler = Scheduler::new(model);
//! let mut sink = InMemorySink::new();
//! scheduler.run(vehicle_orders, restriction_windows, &mut sink)?;
//! ```

pub mod config;
pub mod error;
pub mod scheduler;


pub use config::RunConfig;
pub use error::{SimError, SimResult};
pub use scheduler::Scheduler;
