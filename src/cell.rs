use core::fmt;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// A grid location. Two cells with the same coordinates are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Straight-line distance between the two cell centres.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        d_row.hypot(d_col)
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i64 {
        (self.row as i64 - other.row as i64).abs() + (self.col as i64 - other.col as i64).abs()
    }

    /// The 4-neighbourhood in the order up, right, down, left. Grid bounds are not checked;
    /// neighbours that would fall outside the `i32` coordinate range are left out.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        [
            self.row.checked_sub(1).map(|row| Cell::new(row, self.col)),
            self.col.checked_add(1).map(|col| Cell::new(self.row, col)),
            self.row.checked_add(1).map(|row| Cell::new(row, self.col)),
            self.col.checked_sub(1).map(|col| Cell::new(self.row, col)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> (i32, i32) {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
