//! Parse error for the three embedded text formats, kept local to this demo
//! binary — the library crates never see raw text, only parsed records.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("header line malformed: {0:?}")]
    BadHeader(String),
    #[error("floor {floor} row {row} has wrong width: expected {expected}, got {got:?}")]
    BadFloorRow { floor: usize, row: usize, expected: usize, got: String },
    #[error("floor {floor} not terminated by a `+` line")]
    UnterminatedFloor { floor: usize },
    #[error("entrance line malformed: {0:?}")]
    BadEntranceLine(String),
    #[error("access line malformed: {0:?}")]
    BadAccessLine(String),
    #[error("vehicle order line malformed: {0:?}")]
    BadVehicleLine(String),
    #[error("restriction order line malformed: {0:?}")]
    BadRestrictionLine(String),
    #[error("unrecognized cell role character {0:?}")]
    BadRoleChar(char),
}

pub type ParseResult<T> = Result<T, ParseError>;
