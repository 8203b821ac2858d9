//! Filling: entry cells emit particles that flow into vacant capacity.

use tilt_core::{CellState, Position};
use tilt_propagator::TransitionPolicy;
use tilt_space::Grid;

/// Filling cell states. Layout codes in parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FillCell {
    /// Outside the polyomino (`0`).
    Empty = 0,
    /// Unfilled capacity (`1`).
    Vacant = 1,
    /// Inexhaustible particle source (`2`).
    Entry = 2,
    /// Holding a particle (`3`).
    Filled = 3,
}

impl FillCell {
    /// Whether a particle can leave this cell.
    pub fn emits(self) -> bool {
        matches!(self, Self::Entry | Self::Filled)
    }
}

impl CellState for FillCell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Vacant),
            2 => Some(Self::Entry),
            3 => Some(Self::Filled),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn is_occupied(self) -> bool {
        self == Self::Filled
    }

    fn is_playable(self) -> bool {
        self != Self::Empty
    }
}

/// Movement rule for filling.
///
/// A particle leaves an entry or filled cell for a vacant neighbour. The
/// destination becomes filled; a filled source drains back to vacant while
/// an entry stays an entry, ready to emit again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillingPolicy;

impl TransitionPolicy for FillingPolicy {
    type Cell = FillCell;

    fn name(&self) -> &str {
        "filling"
    }

    fn try_move(&self, grid: &mut Grid<FillCell>, from: Position, to: Position) -> bool {
        let Some(source) = grid.get(from).filter(|c| c.emits()) else {
            return false;
        };
        if grid.get(to) != Some(FillCell::Vacant) {
            return false;
        }
        grid.set(to, FillCell::Filled);
        if source == FillCell::Filled {
            grid.set(from, FillCell::Vacant);
        }
        true
    }

    /// Drain every filled cell. Entries and the region shape are untouched.
    fn restore(&self, _pristine: &Grid<FillCell>, grid: &mut Grid<FillCell>) {
        grid.replace(FillCell::Filled, FillCell::Vacant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_core::Direction;
    use tilt_propagator::settle;
    use tilt_space::Layout;

    fn grid(text: &str) -> Grid<FillCell> {
        Grid::from_layout(&Layout::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn entry_emits_and_stays() {
        let mut g = grid("21");
        assert!(FillingPolicy.try_move(&mut g, Position::new(0, 0), Position::new(1, 0)));
        assert_eq!(g.to_string(), "23");
    }

    #[test]
    fn filled_moves_and_drains_source() {
        let mut g = grid("31");
        assert!(FillingPolicy.try_move(&mut g, Position::new(0, 0), Position::new(1, 0)));
        assert_eq!(g.to_string(), "13");
    }

    #[test]
    fn only_vacant_accepts() {
        for text in ["20", "22", "23", "30", "33"] {
            let mut g = grid(text);
            assert!(
                !FillingPolicy.try_move(&mut g, Position::new(0, 0), Position::new(1, 0)),
                "{text} should not move"
            );
        }
    }

    #[test]
    fn settle_fills_the_lane_behind_an_entry() {
        let mut g = grid("11112");
        let report = settle(&FillingPolicy, &mut g, Direction::West);
        assert!(report.changed());
        assert_eq!(g.to_string(), "33332");
    }

    #[test]
    fn walls_bound_the_fill() {
        let mut g = grid("1102\n1111");
        settle(&FillingPolicy, &mut g, Direction::West);
        assert_eq!(g.to_string(), "1102\n1111");
        settle(&FillingPolicy, &mut g, Direction::South);
        assert_eq!(g.to_string(), "1102\n1113");
    }

    #[test]
    fn restore_drains_everything_filled() {
        let pristine = grid("11112\n11111");
        let mut g = pristine.clone();
        settle(&FillingPolicy, &mut g, Direction::West);
        settle(&FillingPolicy, &mut g, Direction::South);
        assert!(g.occupied() > 0);
        FillingPolicy.restore(&pristine, &mut g);
        assert_eq!(g, pristine);
    }
}
