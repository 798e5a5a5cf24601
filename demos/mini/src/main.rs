//! mini — smallest example for the parking-lot router and scheduler.
//!
//! A one-spot lot: two vehicles arrive, the second waits for the first to
//! leave, and a floor restriction window brackets the end of the run. Scale
//! comment: swap the embedded strings below for file reads (`std::fs::read_to_string`)
//! and a real multi-floor configuration to drive an actual lot.

mod error;
mod parser;

use std::path::Path;

use anyhow::Result;

use pk_map::ParkModel;
use pk_output::CsvEventSink;
use pk_sim::Scheduler;

#[cfg(test)]
mod tests;

// ── Embedded park configuration ───────────────────────────────────────────────
//
// ```text
// y=2: @ @ @
// y=1: e . a
// y=0: @ @ @
// ```
const CONFIG: &str = "\
3 3 1 1 1
@@@
e.a
@@@
E en1 0 1 0 e
A ac1 2 1 0 C
+
";

// ── Embedded vehicle orders ───────────────────────────────────────────────────
const VEHICLE_ORDERS: &str = "\
V v1 0 C 0 1 0
V v2 1 C 0 1 0
V v1 10
";

// ── Embedded restriction orders — brackets the tail of the run, no effect on
// routing (both vehicles are already served by t=20) ─────────────────────────
const RESTRICTION_ORDERS: &str = "\
R 20 25 0
";

fn main() -> Result<()> {
    println!("=== mini — parking-lot router and scheduler ===");

    let grid = parser::parse_config(CONFIG)?;
    let vehicle_orders = parser::parse_vehicle_orders(VEHICLE_ORDERS)?;
    let restriction_windows = parser::parse_restriction_orders(RESTRICTION_ORDERS)?;
    println!("Loaded {} vehicle order(s), {} restriction window(s)", vehicle_orders.len(), restriction_windows.len());

    let model = ParkModel::build(grid);
    println!("Compiled graph: {} available spot(s) at start", model.available_total());

    let mut scheduler = Scheduler::new(model);

    std::fs::create_dir_all("output/mini")?;
    let mut sink = CsvEventSink::new(Path::new("output/mini"))?;
    scheduler.run(vehicle_orders, restriction_windows, &mut sink)?;
    sink.finish()?;
    if let Some(e) = sink.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete.");
    println!("  still waiting : {}", scheduler.waiting_queue_len());
    println!("  events.csv / summaries.csv written under output/mini/");

    Ok(())
}
