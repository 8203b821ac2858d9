//! Cell coordinates.

use crate::direction::Direction;
use std::fmt;

/// A `(column, row)` cell coordinate.
///
/// Components are signed so that predicates can name the cell one step
/// beyond the border; grids answer such probes with `None` instead of
/// failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index, growing eastwards.
    pub col: i32,
    /// Row index, growing southwards.
    pub row: i32,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The adjacent position one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            col: self.col + dx,
            row: self.row + dy,
        }
    }

    /// The four edge-adjacent positions, in `Direction::ALL` order.
    ///
    /// Positions outside any particular grid are included; callers filter.
    pub fn adjacent(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Position {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}
