//! Unit tests for the ramp-constrained Dijkstra engine.

use crate::{PathEngine, RouteOutcome};
use pk_core::CellRole as R;
use pk_map::{AccessPoint, Grid, ParkModel};

/// Same single-floor layout `pk-map`'s own tests use:
/// ```text
/// y=2: @  e  @
/// y=1: .     .
/// y=0: @  a  @
/// ```
fn entrance_to_access_grid() -> Grid {
    let cells = vec![
        R::Wall, R::Access, R::Wall, // y = 0
        R::Spot, R::Driveway, R::Spot, // y = 1
        R::Wall, R::Entrance, R::Wall, // y = 2
    ];
    Grid::new(3, 3, 1, cells, vec![(1, 2, 0)], vec![AccessPoint { x: 1, y: 0, z: 0, access_type: 'p' }])
}

/// One column, two floors, a ramp linking them:
/// ```text
/// z=1: u  R  .       (u = driveway, R = ramp-down, . = spot)
/// z=0: u  R  u        (u = driveway, R = ramp-up)
/// ```
fn ramp_grid() -> Grid {
    let cells = vec![
        R::Driveway, R::RampUp, R::Driveway, // z = 0
        R::Driveway, R::RampDown, R::Spot, // z = 1
    ];
    Grid::new(1, 3, 2, cells, Vec::new(), Vec::new())
}

#[test]
fn reaches_access_sink_through_drive_bridge_and_walk_legs() {
    let mut model = ParkModel::build(entrance_to_access_grid());
    let origin = model.dims().drive(1, 2, 0);
    let sink = model.sink_for('p').unwrap();

    let RouteOutcome { cost, reached } = model.shortest_path(origin, sink);
    assert!(reached);
    // entrance->driveway (1) + driveway->spot (1) + bridge (0)
    // + spot walk->driveway walk (3) + driveway walk->access walk (3) + sink (0)
    assert_eq!(cost, 8);
}

#[test]
fn unreachable_destination_reports_not_reached() {
    let mut model = ParkModel::build(entrance_to_access_grid());
    let origin = model.dims().drive(1, 2, 0);
    // The far spot's walk node is not reachable from the drive-side origin
    // without first bridging — pick a drive node query that has no route at
    // all by restricting the only path out of the entrance.
    model.restrict_cell(1, 1, 0);
    let dest = model.dims().drive(0, 1, 0);

    let outcome = model.shortest_path(origin, dest);
    assert!(!outcome.reached);
    assert_eq!(outcome.cost, pk_map::NOCON);
}

#[test]
fn zero_length_path_from_origin_to_itself_is_reached() {
    let mut model = ParkModel::build(entrance_to_access_grid());
    let origin = model.dims().drive(1, 2, 0);

    let outcome = model.shortest_path(origin, origin);
    assert!(outcome.reached);
    assert_eq!(outcome.cost, 0);
}

#[test]
fn ramp_entered_from_non_ramp_only_relaxes_vertical_neighbour() {
    let mut model = ParkModel::build(ramp_grid());
    let origin = model.dims().drive(0, 0, 0);
    let dest = model.dims().drive(0, 2, 1);

    let RouteOutcome { cost, reached } = model.shortest_path(origin, dest);
    assert!(reached);
    // driveway->ramp-up (1) + ramp-up->ramp-down vertical (2) + ramp-down->spot (1)
    assert_eq!(cost, 4);
}

#[test]
fn ramp_to_ramp_chaining_allows_lateral_relaxation() {
    let mut model = ParkModel::build(ramp_grid());
    let origin = model.dims().drive(0, 1, 0);
    let dest = model.dims().drive(0, 0, 1);

    let RouteOutcome { cost, reached } = model.shortest_path(origin, dest);
    assert!(reached);
    // ramp-up->ramp-down vertical (2) + ramp-down->driveway lateral (1),
    // only legal because the predecessor at ramp-down is itself a ramp.
    assert_eq!(cost, 3);
}

#[test]
fn scratch_state_is_reusable_across_successive_queries() {
    let mut model = ParkModel::build(entrance_to_access_grid());
    let origin = model.dims().drive(1, 2, 0);
    let sink = model.sink_for('p').unwrap();

    let first = model.shortest_path(origin, sink);
    let second = model.shortest_path(origin, sink);
    assert_eq!(first.cost, second.cost);
    assert!(second.reached);
}
