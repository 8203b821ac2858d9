//! Fixed-size cell storage with bounds-checked access.

use crate::error::LayoutError;
use crate::layout::Layout;
use smallvec::SmallVec;
use std::fmt;
use tilt_core::{CellState, Position};

/// A rectangular grid of variant cell states.
///
/// Dimensions are fixed at construction. Every read or write outside
/// `0..columns` x `0..rows` is answered with `None` / `false` rather than
/// panicking, so rule predicates can probe one step past the border.
///
/// Storage is row-major: index `row * columns + col`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<C> {
    columns: u32,
    rows: u32,
    cells: Vec<C>,
}

impl<C: CellState> Grid<C> {
    /// Decode a layout into cell states.
    ///
    /// Returns [`LayoutError::UnknownCode`] for the first code (in row-major
    /// order) that `C` does not define.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        let columns = layout.columns();
        let mut cells = Vec::with_capacity(layout.codes().len());
        for (i, &code) in layout.codes().iter().enumerate() {
            let cell = C::from_code(code).ok_or_else(|| LayoutError::UnknownCode {
                code,
                position: Position::new(
                    (i % columns as usize) as i32,
                    (i / columns as usize) as i32,
                ),
            })?;
            cells.push(cell);
        }
        Ok(Self {
            columns,
            rows: layout.rows(),
            cells,
        })
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// `(columns, rows)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.col >= 0 && pos.row >= 0 && (pos.col as u32) < self.columns && (pos.row as u32) < self.rows
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row as usize * self.columns as usize + pos.col as usize)
    }

    /// The cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<C> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns `false` (and does nothing)
    /// outside the grid.
    pub fn set(&mut self, pos: Position, cell: C) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell equal to `from` with `to`. Returns how many
    /// cells changed.
    pub fn replace(&mut self, from: C, to: C) -> usize {
        let mut changed = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == from) {
            *cell = to;
            changed += 1;
        }
        changed
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns as i32;
        (0..self.rows as i32).flat_map(move |row| (0..columns).map(move |col| Position::new(col, row)))
    }

    /// Every `(position, cell)` pair, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, C)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, pred: impl Fn(C) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// Number of cells holding a particle.
    pub fn occupied(&self) -> usize {
        self.count(C::is_occupied)
    }

    /// In-bounds edge neighbours of `pos`, in `Direction::ALL` order.
    pub fn neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.adjacent()
            .into_iter()
            .filter(|&p| self.contains(p))
            .collect()
    }

    /// Encode back into a layout of integer codes.
    pub fn to_layout(&self) -> Layout {
        Layout::from_parts(
            self.columns,
            self.rows,
            self.cells.iter().map(|c| c.code()).collect(),
        )
    }

    /// The integer codes row by row, as nested vectors.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

impl<C: CellState> fmt::Display for Grid<C> {
    /// One line per row. Codes below ten print as a single digit with no
    /// separator; wider codes fall back to comma separation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.cells.iter().any(|c| c.code() > 9);
        for (i, row) in self.cells.chunks(self.columns as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if wide && j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", cell.code())?;
            }
        }
        Ok(())
    }
}
