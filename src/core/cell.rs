use std::fmt;

/// Edge length of the board. The grid is `GRID_SIZE` x `GRID_SIZE`, rows and
/// columns both indexed from 0; row 0 is the top edge.
pub const GRID_SIZE: i8 = 6;

/// A grid cell addressed as (row, col).
///
/// Cells are plain signed pairs so slide arithmetic can step off the grid;
/// callers check [`Cell::in_bounds`] after offsetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < GRID_SIZE && self.col >= 0 && self.col < GRID_SIZE
    }

    /// Dense row-major index in `0..GRID_SIZE * GRID_SIZE`.
    ///
    /// This is the unit from which board keys are packed; only in-bounds cells
    /// have one.
    #[inline]
    pub fn index(self) -> u8 {
        debug_assert!(self.in_bounds());
        (self.row as u8) * (GRID_SIZE as u8) + (self.col as u8)
    }

    /// Offset by a (row, col) delta. The result may be out of bounds.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Cell {
        Cell {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
