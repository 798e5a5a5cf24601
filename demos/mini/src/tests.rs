//! Unit tests for the embedded-text parsers.

use pk_core::{CellRole, SimTime};
use pk_schedule::{RestrictionScope, VehicleOrder};

use crate::error::ParseError;
use crate::parser::{parse_config, parse_restriction_orders, parse_vehicle_orders};

#[test]
fn parse_config_reads_header_rows_entrances_and_access_points() {
    let grid = parse_config(crate::CONFIG).unwrap();
    assert_eq!(grid.dims.n, 3);
    assert_eq!(grid.dims.m, 3);
    assert_eq!(grid.dims.p, 1);
    assert_eq!(grid.entrances, vec![(0, 1, 0)]);
    assert_eq!(grid.access_points.len(), 1);
    assert_eq!(grid.access_points[0].access_type, 'C');

    // row "e.a" is the middle row (y=1), "@@@" rows sit above and below it.
    assert_eq!(grid.role_at(0, 1, 0), CellRole::Entrance);
    assert_eq!(grid.role_at(1, 1, 0), CellRole::Spot);
    assert_eq!(grid.role_at(2, 1, 0), CellRole::Access);
    assert_eq!(grid.role_at(0, 2, 0), CellRole::Wall);
}

#[test]
fn parse_config_rejects_a_short_row() {
    let bad = "3 3 1 0 0\n@@\ne.a\n@@@\n+\n";
    assert!(matches!(parse_config(bad), Err(ParseError::BadFloorRow { .. })));
}

#[test]
fn parse_config_rejects_an_unterminated_floor() {
    let bad = "3 3 1 0 0\n@@@\ne.a\n@@@\n";
    assert!(matches!(parse_config(bad), Err(ParseError::UnterminatedFloor { .. })));
}

#[test]
fn parse_vehicle_orders_distinguishes_arrival_departure_by_coord_and_by_id() {
    let text = "\
V v1 0 C 0 1 0
V v2 5 S 2 1 0
V v3 10
";
    let orders = parse_vehicle_orders(text).unwrap();
    assert_eq!(orders.len(), 3);
    assert!(matches!(&orders[0], VehicleOrder::Arrival(req) if req.id == "v1" && req.access_type == 'C'));
    assert!(matches!(orders[1], VehicleOrder::DepartureByCoord { t: SimTime(5), x: 2, y: 1, z: 0 }));
    assert!(matches!(&orders[2], VehicleOrder::DepartureById { id, t: SimTime(10) } if id == "v3"));
}

#[test]
fn parse_vehicle_orders_rejects_a_malformed_line() {
    let bad = "V v1 0 C 0 1\n";
    assert!(matches!(parse_vehicle_orders(bad), Err(ParseError::BadVehicleLine(_))));
}

#[test]
fn parse_restriction_orders_distinguishes_cell_and_floor_scope() {
    let text = "\
R 0 5 1 2 0
R 10 15 3
";
    let windows = parse_restriction_orders(text).unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].t_a, SimTime(0));
    assert_eq!(windows[0].t_b, SimTime(5));
    assert!(matches!(windows[0].scope, RestrictionScope::Cell { x: 1, y: 2, z: 0 }));
    assert!(matches!(windows[1].scope, RestrictionScope::Floor { z: 3 }));
}

#[test]
fn parse_restriction_orders_rejects_a_malformed_line() {
    let bad = "R 0 5\n";
    assert!(matches!(parse_restriction_orders(bad), Err(ParseError::BadRestrictionLine(_))));
}
