//! Assembly: which shape cells can take the next tile.
//!
//! A tile enters the board from outside, sliding along a row or column,
//! and must come to rest against a tile already placed. A cell is a
//! candidate iff it is both:
//!
//! - **reachable** from some direction: sliding in from that border, a
//!   tile one lane wide passes no placed tile in the cell's own lane or
//!   the two flanking lanes before reaching the cell;
//! - **dockable**: it has a placed tile as an edge neighbour.
//!
//! Evaluation is a full recomputation. Per-lane extremes of placed tiles
//! are tabulated once, then every cell is checked against them.

use smallvec::SmallVec;
use tilt_core::{CellState, Direction, Position};
use tilt_space::Grid;

/// Assembly cell states. Layout codes in parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssemblyCell {
    /// Outside the shape (`0`).
    Empty = 0,
    /// Shape cell that cannot take a tile now (`1`).
    Vacant = 1,
    /// Placed tile (`2`).
    Occupied = 2,
    /// Shape cell that can take a tile now (`3`).
    Candidate = 3,
}

impl AssemblyCell {
    /// Whether the cell is part of the target shape, tiled or not.
    pub fn in_shape(self) -> bool {
        self != Self::Empty
    }

    /// Shape cell without a tile.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Vacant | Self::Candidate)
    }
}

impl CellState for AssemblyCell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Vacant),
            2 => Some(Self::Occupied),
            3 => Some(Self::Candidate),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn is_occupied(self) -> bool {
        self == Self::Occupied
    }

    fn is_playable(self) -> bool {
        self.in_shape()
    }
}

// ── Extremes ──────────────────────────────────────────────────────

/// Topmost/bottommost placed tile per column and leftmost/rightmost per
/// row.
///
/// Lanes with no tile, and lanes outside the grid, report sentinels chosen
/// so they never constrain reachability: `rows` / `columns` for the lowest
/// index and `-1` for the highest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extremes {
    columns: i32,
    rows: i32,
    lowest_row: Vec<i32>,
    highest_row: Vec<i32>,
    lowest_col: Vec<i32>,
    highest_col: Vec<i32>,
}

impl Extremes {
    /// Tabulate extremes of the occupied cells of `grid`.
    pub fn of(grid: &Grid<AssemblyCell>) -> Self {
        let columns = grid.columns() as i32;
        let rows = grid.rows() as i32;
        let mut ex = Self {
            columns,
            rows,
            lowest_row: vec![rows; columns as usize],
            highest_row: vec![-1; columns as usize],
            lowest_col: vec![columns; rows as usize],
            highest_col: vec![-1; rows as usize],
        };
        for (pos, cell) in grid.iter() {
            if !cell.is_occupied() {
                continue;
            }
            let (c, r) = (pos.col as usize, pos.row as usize);
            ex.lowest_row[c] = ex.lowest_row[c].min(pos.row);
            ex.highest_row[c] = ex.highest_row[c].max(pos.row);
            ex.lowest_col[r] = ex.lowest_col[r].min(pos.col);
            ex.highest_col[r] = ex.highest_col[r].max(pos.col);
        }
        ex
    }

    fn lane(values: &[i32], index: i32, sentinel: i32) -> i32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| values.get(i))
            .copied()
            .unwrap_or(sentinel)
    }

    /// Smallest occupied row in column `col`, or `rows`.
    pub fn lowest_row(&self, col: i32) -> i32 {
        Self::lane(&self.lowest_row, col, self.rows)
    }

    /// Largest occupied row in column `col`, or `-1`.
    pub fn highest_row(&self, col: i32) -> i32 {
        Self::lane(&self.highest_row, col, -1)
    }

    /// Smallest occupied column in row `row`, or `columns`.
    pub fn lowest_col(&self, row: i32) -> i32 {
        Self::lane(&self.lowest_col, row, self.columns)
    }

    /// Largest occupied column in row `row`, or `-1`.
    pub fn highest_col(&self, row: i32) -> i32 {
        Self::lane(&self.highest_col, row, -1)
    }
}

// ── Predicates ────────────────────────────────────────────────────

/// Whether a tile sliding in from the `direction` border reaches `pos`.
///
/// "From north" means entering at row 0 and travelling south.
pub fn is_reachable_from(extremes: &Extremes, pos: Position, direction: Direction) -> bool {
    let Position { col, row } = pos;
    let flank = |i: i32| [i - 1, i, i + 1];
    match direction {
        Direction::North => flank(col).iter().all(|&c| row <= extremes.lowest_row(c)),
        Direction::South => flank(col).iter().all(|&c| row >= extremes.highest_row(c)),
        Direction::East => flank(row).iter().all(|&r| col >= extremes.highest_col(r)),
        Direction::West => flank(row).iter().all(|&r| col <= extremes.lowest_col(r)),
    }
}

/// Whether `pos` is reachable from any border.
pub fn is_reachable(extremes: &Extremes, pos: Position) -> bool {
    Direction::ALL
        .iter()
        .any(|&d| is_reachable_from(extremes, pos, d))
}

/// In-bounds edge neighbours of `pos` that hold a placed tile.
pub fn docking_neighbours(grid: &Grid<AssemblyCell>, pos: Position) -> SmallVec<[Position; 4]> {
    grid.neighbours(pos)
        .into_iter()
        .filter(|&p| grid.get(p).is_some_and(AssemblyCell::is_occupied))
        .collect()
}

/// Whether `pos` has at least one placed tile as an edge neighbour.
pub fn is_dockable(grid: &Grid<AssemblyCell>, pos: Position) -> bool {
    !docking_neighbours(grid, pos).is_empty()
}

/// Recompute every open shape cell: `Candidate` if reachable and dockable,
/// otherwise `Vacant`. Placed tiles and empty cells are untouched.
///
/// Returns the number of candidates.
pub fn evaluate_reachability(grid: &mut Grid<AssemblyCell>) -> usize {
    let extremes = Extremes::of(grid);
    let verdicts: Vec<(Position, AssemblyCell)> = grid
        .iter()
        .filter(|(_, cell)| cell.is_open())
        .map(|(pos, _)| {
            let next = if is_reachable(&extremes, pos) && is_dockable(grid, pos) {
                AssemblyCell::Candidate
            } else {
                AssemblyCell::Vacant
            };
            (pos, next)
        })
        .collect();
    let mut candidates = 0;
    for (pos, cell) in verdicts {
        grid.set(pos, cell);
        if cell == AssemblyCell::Candidate {
            candidates += 1;
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_space::Layout;

    fn grid(text: &str) -> Grid<AssemblyCell> {
        Grid::from_layout(&Layout::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn sentinels_for_empty_and_out_of_range_lanes() {
        let g = grid("111\n111");
        let ex = Extremes::of(&g);
        for i in -1..4 {
            assert_eq!(ex.lowest_row(i), 2);
            assert_eq!(ex.highest_row(i), -1);
            assert_eq!(ex.lowest_col(i), 3);
            assert_eq!(ex.highest_col(i), -1);
        }
    }

    #[test]
    fn extremes_track_occupied_cells_only() {
        let g = grid("1213\n1111\n3121");
        let ex = Extremes::of(&g);
        assert_eq!(ex.lowest_row(1), 0);
        assert_eq!(ex.highest_row(1), 0);
        assert_eq!(ex.lowest_row(2), 2);
        assert_eq!(ex.lowest_row(3), 3);
        assert_eq!(ex.lowest_col(0), 1);
        assert_eq!(ex.highest_col(2), 2);
        assert_eq!(ex.lowest_col(1), 4);
    }

    #[test]
    fn flanking_lanes_block_reachability() {
        // Tile at (2,1). Cell (1,2) is below-left of it.
        let g = grid("1111\n1121\n1111\n1111");
        let ex = Extremes::of(&g);
        let p = Position::new(1, 2);
        assert!(!is_reachable_from(&ex, p, Direction::North), "column 2 tile blocks");
        assert!(is_reachable_from(&ex, p, Direction::South));
        assert!(!is_reachable_from(&ex, p, Direction::East), "row 1 tile blocks");
        assert!(is_reachable_from(&ex, p, Direction::West));
    }

    #[test]
    fn enclosed_cell_is_unreachable() {
        let g = grid("121\n212\n121");
        let ex = Extremes::of(&g);
        assert!(!is_reachable(&ex, Position::new(1, 1)));
        assert!(is_dockable(&g, Position::new(1, 1)));
    }

    #[test]
    fn docking_requires_an_adjacent_tile() {
        let g = grid("2111\n1111");
        assert!(is_dockable(&g, Position::new(1, 0)));
        assert!(is_dockable(&g, Position::new(0, 1)));
        assert!(!is_dockable(&g, Position::new(1, 1)), "diagonal does not dock");
        assert!(!is_dockable(&g, Position::new(3, 0)));
        assert_eq!(docking_neighbours(&g, Position::new(1, 0)).len(), 1);
    }

    #[test]
    fn evaluate_without_tiles_yields_no_candidates() {
        let mut g = grid("3333\n3013");
        assert_eq!(evaluate_reachability(&mut g), 0);
        assert_eq!(g.to_string(), "1111\n1011");
    }

    #[test]
    fn evaluate_marks_docking_sites() {
        let mut g = grid("111\n121\n111");
        assert_eq!(evaluate_reachability(&mut g), 4);
        assert_eq!(g.to_string(), "131\n323\n131");
    }

    #[test]
    fn evaluate_leaves_empty_and_tiles_alone() {
        let mut g = grid("0120\n0110");
        evaluate_reachability(&mut g);
        assert_eq!(g.get(Position::new(0, 0)), Some(AssemblyCell::Empty));
        assert_eq!(g.get(Position::new(2, 0)), Some(AssemblyCell::Occupied));
        assert_eq!(g.to_string(), "0320\n0130");
    }
}
