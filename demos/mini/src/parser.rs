//! Parsers for the three embedded text record formats: park configuration,
//! vehicle orders, restriction orders. A line-oriented parser — text parsing
//! is a caller concern the library crates never see, on purpose.

use pk_core::{CellRole, SimTime};
use pk_map::{AccessPoint, Grid};
use pk_schedule::{ArrivalRequest, RestrictionScope, RestrictionWindow, VehicleOrder};

use crate::error::{ParseError, ParseResult};

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses a park configuration: header `N M P E S`, then `P` floors of `M`
/// rows of `N` role characters (first row is `y = M-1`), each floor followed
/// by zero or more `E`/`A` lines and a terminating `+` line.
pub fn parse_config(text: &str) -> ParseResult<Grid> {
    let mut lines = text.lines().map(strip_cr);

    let header = lines.next().ok_or_else(|| ParseError::BadHeader(String::new()))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(ParseError::BadHeader(header.to_string()));
    }
    let parse_usize = |s: &str| s.parse::<usize>().map_err(|_| ParseError::BadHeader(header.to_string()));
    let n = parse_usize(fields[0])?;
    let m = parse_usize(fields[1])?;
    let p = parse_usize(fields[2])?;
    let declared_entrances = parse_usize(fields[3])?;
    let declared_access = parse_usize(fields[4])?;

    let mut cells = vec![CellRole::Wall; n * m * p];
    let mut entrances = Vec::with_capacity(declared_entrances);
    let mut access_points = Vec::with_capacity(declared_access);

    for floor in 0..p {
        for row in 0..m {
            let line = lines.next().ok_or(ParseError::UnterminatedFloor { floor })?;
            if line.chars().count() != n {
                return Err(ParseError::BadFloorRow { floor, row, expected: n, got: line.to_string() });
            }
            let y = m - 1 - row;
            for (x, ch) in line.chars().enumerate() {
                let role = CellRole::from_char(ch).ok_or(ParseError::BadRoleChar(ch))?;
                cells[x + n * y + n * m * floor] = role;
            }
        }

        loop {
            let line = lines.next().ok_or(ParseError::UnterminatedFloor { floor })?;
            if line == "+" {
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.first() {
                Some(&"E") => {
                    if tokens.len() != 6 {
                        return Err(ParseError::BadEntranceLine(line.to_string()));
                    }
                    let bad = || ParseError::BadEntranceLine(line.to_string());
                    let x = tokens[2].parse::<usize>().map_err(|_| bad())?;
                    let y = tokens[3].parse::<usize>().map_err(|_| bad())?;
                    let z = tokens[4].parse::<usize>().map_err(|_| bad())?;
                    entrances.push((x, y, z));
                }
                Some(&"A") => {
                    if tokens.len() != 6 {
                        return Err(ParseError::BadAccessLine(line.to_string()));
                    }
                    let bad = || ParseError::BadAccessLine(line.to_string());
                    let x = tokens[2].parse::<usize>().map_err(|_| bad())?;
                    let y = tokens[3].parse::<usize>().map_err(|_| bad())?;
                    let z = tokens[4].parse::<usize>().map_err(|_| bad())?;
                    let access_type = tokens[5].chars().next().ok_or_else(bad)?;
                    access_points.push(AccessPoint { x, y, z, access_type });
                }
                _ => return Err(ParseError::BadEntranceLine(line.to_string())),
            }
        }
    }

    Ok(Grid::new(n, m, p, cells, entrances, access_points))
}

/// Parses `V`-lines into [`VehicleOrder`]s: six tokens after `V` for an
/// arrival or departure-by-coord (the `S` sentinel), three tokens for
/// departure-by-id.
pub fn parse_vehicle_orders(text: &str) -> ParseResult<Vec<VehicleOrder>> {
    let mut orders = Vec::new();
    for line in text.lines().map(strip_cr) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let bad = || ParseError::BadVehicleLine(line.to_string());
        if tokens.first() != Some(&"V") {
            return Err(bad());
        }
        match tokens.len() {
            3 => {
                let id = tokens[1].to_string();
                let t = tokens[2].parse::<i64>().map_err(|_| bad())?;
                orders.push(VehicleOrder::DepartureById { id, t: SimTime(t) });
            }
            7 => {
                let id = tokens[1].to_string();
                let t = tokens[2].parse::<i64>().map_err(|_| bad())?;
                let access_type = tokens[3].chars().next().ok_or_else(bad)?;
                let x = tokens[4].parse::<usize>().map_err(|_| bad())?;
                let y = tokens[5].parse::<usize>().map_err(|_| bad())?;
                let z = tokens[6].parse::<usize>().map_err(|_| bad())?;
                if access_type == 'S' {
                    orders.push(VehicleOrder::DepartureByCoord { t: SimTime(t), x, y, z });
                } else {
                    orders.push(VehicleOrder::Arrival(ArrivalRequest { id, t_request: SimTime(t), entrance: (x, y, z), access_type }));
                }
            }
            _ => return Err(bad()),
        }
    }
    Ok(orders)
}

/// Parses `R`-lines into [`RestrictionWindow`]s: five tokens after `R` for
/// a cell window, three for a floor window.
pub fn parse_restriction_orders(text: &str) -> ParseResult<Vec<RestrictionWindow>> {
    let mut windows = Vec::new();
    for line in text.lines().map(strip_cr) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let bad = || ParseError::BadRestrictionLine(line.to_string());
        if tokens.first() != Some(&"R") {
            return Err(bad());
        }
        let t_a = tokens.get(1).ok_or_else(bad)?.parse::<i64>().map_err(|_| bad())?;
        let t_b = tokens.get(2).ok_or_else(bad)?.parse::<i64>().map_err(|_| bad())?;
        let scope = match tokens.len() {
            6 => {
                let x = tokens[3].parse::<usize>().map_err(|_| bad())?;
                let y = tokens[4].parse::<usize>().map_err(|_| bad())?;
                let z = tokens[5].parse::<usize>().map_err(|_| bad())?;
                RestrictionScope::Cell { x, y, z }
            }
            4 => {
                let z = tokens[3].parse::<usize>().map_err(|_| bad())?;
                RestrictionScope::Floor { z }
            }
            _ => return Err(bad()),
        };
        windows.push(RestrictionWindow { t_a: SimTime(t_a), t_b: SimTime(t_b), scope });
    }
    Ok(windows)
}
