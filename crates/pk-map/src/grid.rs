//! The static cell grid a park configuration compiles from.
//!
//! `Grid` is a parsed, validated in-memory representation — it carries no
//! knowledge of the text format that produced it (that lives in
//! `demos/mini`). Building one from raw text is a caller concern; `pk-map`
//! only ever consumes the finished structure.

use pk_core::{CellRole, GraphDims};

/// One access point: the cell it sits at and the access type it leads to.
#[derive(Copy, Clone, Debug)]
pub struct AccessPoint {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub access_type: char,
}

pub struct Grid {
    pub dims: GraphDims,
    cells: Vec<CellRole>,
    pub entrances: Vec<(usize, usize, usize)>,
    pub access_points: Vec<AccessPoint>,
}

impl Grid {
    /// `cells` must be in `x + N*y + N*M*z` order and have
    /// exactly `n*m*p` entries; `dims.t` is ignored and recomputed from the
    /// distinct access types observed in `access_points`.
    pub fn new(
        n: usize,
        m: usize,
        p: usize,
        cells: Vec<CellRole>,
        entrances: Vec<(usize, usize, usize)>,
        access_points: Vec<AccessPoint>,
    ) -> Self {
        assert_eq!(cells.len(), n * m * p, "grid cell count must equal n*m*p");
        let dims = GraphDims::new(n, m, p, 0);
        Self { dims, cells, entrances, access_points }
    }

    #[inline]
    pub fn role_at(&self, x: usize, y: usize, z: usize) -> CellRole {
        self.cells[self.dims.cell_index(x, y, z)]
    }

    #[inline]
    pub fn set_role_at(&mut self, x: usize, y: usize, z: usize, role: CellRole) {
        let i = self.dims.cell_index(x, y, z);
        self.cells[i] = role;
    }

    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize, z: isize) -> bool {
        x >= 0 && y >= 0 && z >= 0 && (x as usize) < self.dims.n && (y as usize) < self.dims.m && (z as usize) < self.dims.p
    }

    /// The four in-plane orthogonal neighbours of `(x, y, z)` that lie
    /// within the grid, paired with their coordinates.
    pub fn neighbours(&self, x: usize, y: usize, z: usize) -> Vec<(usize, usize, usize)> {
        let (xi, yi, zi) = (x as isize, y as isize, z as isize);
        [(xi - 1, yi, zi), (xi + 1, yi, zi), (xi, yi - 1, zi), (xi, yi + 1, zi)]
            .into_iter()
            .filter(|&(nx, ny, nz)| self.in_bounds(nx, ny, nz))
            .map(|(nx, ny, nz)| (nx as usize, ny as usize, nz as usize))
            .collect()
    }
}
