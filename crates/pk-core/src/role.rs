//! Cell roles and the static neighbour-admissibility table used by the graph
//! compiler.
//!
//! The compiler distinguishes *origin* eligibility (does this cell emit a
//! horizontal edge to a neighbour at all?) from *destination* eligibility
//! (can a neighbour's edge terminate here?), because several roles are
//! one-directional: a free/occupied spot is drive-in only (it never
//! originates a further drive edge) and an access point is walk-out only
//! (it never originates a lateral walk edge, only the zero-cost hop to its
//! sink).

use std::fmt;

/// The one-character function of a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellRole {
    /// `@` — impassable.
    Wall,
    /// `' '` — open driveway, drivable and walkable.
    Driveway,
    /// `.` — free parking spot.
    Spot,
    /// `x` — occupied/blocked parking spot.
    Occupied,
    /// `u` — ramp up (drives/walks to `z + 1`).
    RampUp,
    /// `d` — ramp down (drives/walks to `z - 1`).
    RampDown,
    /// `e` — external entrance, one-way drive-in.
    Entrance,
    /// `a` — pedestrian access point, one-way walk-out.
    Access,
}

impl CellRole {
    /// Parse a role character from the grid body (not the `E`/`A` record
    /// lines, which carry their own ids/desc/type fields).
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '@' => CellRole::Wall,
            ' ' => CellRole::Driveway,
            '.' => CellRole::Spot,
            'x' => CellRole::Occupied,
            'u' => CellRole::RampUp,
            'd' => CellRole::RampDown,
            'e' => CellRole::Entrance,
            'a' => CellRole::Access,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            CellRole::Wall => '@',
            CellRole::Driveway => ' ',
            CellRole::Spot => '.',
            CellRole::Occupied => 'x',
            CellRole::RampUp => 'u',
            CellRole::RampDown => 'd',
            CellRole::Entrance => 'e',
            CellRole::Access => 'a',
        }
    }

    #[inline]
    pub fn is_ramp(self) -> bool {
        matches!(self, CellRole::RampUp | CellRole::RampDown)
    }

    #[inline]
    pub fn is_spot_like(self) -> bool {
        matches!(self, CellRole::Spot | CellRole::Occupied)
    }

    /// `true` if this role emits horizontal (and, for ramps, vertical) drive
    /// edges to its neighbours during compilation. Spots are drive-in only:
    /// they receive a drive edge but never originate one.
    #[inline]
    pub fn drives_out(self) -> bool {
        matches!(self, CellRole::Driveway | CellRole::RampUp | CellRole::RampDown)
    }

    /// `true` if a neighbouring cell may legally aim a drive edge at this
    /// role. Walls, entrances (drive-in is one-way *from* the entrance, not
    /// *into* it from the inside) and access points are never valid drive
    /// targets.
    #[inline]
    pub fn drivable_dest(self) -> bool {
        matches!(
            self,
            CellRole::Driveway | CellRole::Spot | CellRole::Occupied | CellRole::RampUp | CellRole::RampDown
        )
    }

    /// `true` if this role emits horizontal (and, for ramps, vertical) walk
    /// edges to its neighbours. Access points are walk-out only: reachable
    /// by neighbours, but their sole outgoing edge is the zero-cost hop to
    /// their sink, not a lateral walk edge.
    #[inline]
    pub fn walks_out(self) -> bool {
        matches!(
            self,
            CellRole::Driveway | CellRole::Spot | CellRole::Occupied | CellRole::RampUp | CellRole::RampDown
        )
    }

    /// `true` if a neighbouring cell may legally aim a walk edge at this
    /// role.
    #[inline]
    pub fn walkable_dest(self) -> bool {
        self.walks_out() || matches!(self, CellRole::Access)
    }
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
