//! Gathering: particles slide until they pile up against the border or
//! each other.

use tilt_core::{CellState, Position};
use tilt_propagator::TransitionPolicy;
use tilt_space::Grid;

/// Gathering cell states. Layout codes in parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GatherCell {
    /// Outside the polyomino (`0`).
    Empty = 0,
    /// Inside, no particle (`1`).
    Vacant = 1,
    /// Inside, holding a particle (`2`).
    Occupied = 2,
}

impl CellState for GatherCell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Vacant),
            2 => Some(Self::Occupied),
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
        self != Self::Empty
    }
}

/// Movement rule for gathering.
///
/// The default (blocking) rule moves a particle only into a vacant cell,
/// so the number of particles never changes. The merging rule also lets a
/// particle enter an occupied cell, where the two become one; the count
/// can then only go down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GatheringPolicy {
    merge: bool,
}

impl GatheringPolicy {
    /// Particles stop at the first non-vacant cell.
    pub const fn blocking() -> Self {
        Self { merge: false }
    }

    /// Particles entering an occupied cell merge with its occupant.
    pub const fn merging() -> Self {
        Self { merge: true }
    }

    /// Whether this rule merges particles.
    pub fn merges(&self) -> bool {
        self.merge
    }
}

impl TransitionPolicy for GatheringPolicy {
    type Cell = GatherCell;

    fn name(&self) -> &str {
        if self.merge {
            "gathering(merge)"
        } else {
            "gathering"
        }
    }

    fn try_move(&self, grid: &mut Grid<GatherCell>, from: Position, to: Position) -> bool {
        if grid.get(from) != Some(GatherCell::Occupied) {
            return false;
        }
        match grid.get(to) {
            Some(GatherCell::Vacant) => {
                grid.set(to, GatherCell::Occupied);
                grid.set(from, GatherCell::Vacant);
                true
            }
            Some(GatherCell::Occupied) if self.merge => grid.set(from, GatherCell::Vacant),
            _ => false,
        }
    }
}
