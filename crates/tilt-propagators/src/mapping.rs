//! Mapping: particles explore a hidden region and reveal its border.
//!
//! Every cell starts hidden, but the hidden states still carry the ground
//! truth (inside or outside the polyomino). A particle walks through
//! hidden or discovered interior cells, marking them discovered as it
//! leaves. Bumping into a hidden exterior cell reveals it as discovered
//! empty; the particle itself stays put.

use tilt_core::{CellState, Position};
use tilt_propagator::TransitionPolicy;
use tilt_space::Grid;

/// Mapping cell states. Layout codes in parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MapCell {
    /// Undiscovered, outside the polyomino (`0`).
    HiddenExterior = 0,
    /// Undiscovered, inside the polyomino (`1`).
    HiddenInterior = 1,
    /// Holding a particle (`2`).
    Occupied = 2,
    /// Discovered inside cell without a particle (`3`).
    DiscoveredVacant = 3,
    /// Discovered outside cell (`4`).
    DiscoveredEmpty = 4,
}

impl MapCell {
    /// Whether the player has seen this cell.
    pub fn is_discovered(self) -> bool {
        matches!(
            self,
            Self::Occupied | Self::DiscoveredVacant | Self::DiscoveredEmpty
        )
    }

    /// Ground truth: whether the cell lies inside the polyomino.
    pub fn is_interior(self) -> bool {
        matches!(
            self,
            Self::HiddenInterior | Self::Occupied | Self::DiscoveredVacant
        )
    }
}

impl CellState for MapCell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::HiddenExterior),
            1 => Some(Self::HiddenInterior),
            2 => Some(Self::Occupied),
            3 => Some(Self::DiscoveredVacant),
            4 => Some(Self::DiscoveredEmpty),
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
        self.is_interior()
    }
}

/// Movement and discovery rule for mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MappingPolicy;

impl TransitionPolicy for MappingPolicy {
    type Cell = MapCell;

    fn name(&self) -> &str {
        "mapping"
    }

    fn try_move(&self, grid: &mut Grid<MapCell>, from: Position, to: Position) -> bool {
        if grid.get(from) != Some(MapCell::Occupied) {
            return false;
        }
        match grid.get(to) {
            Some(MapCell::HiddenInterior | MapCell::DiscoveredVacant) => {
                grid.set(to, MapCell::Occupied);
                grid.set(from, MapCell::DiscoveredVacant);
                true
            }
            Some(MapCell::HiddenExterior) => grid.set(to, MapCell::DiscoveredEmpty),
            _ => false,
        }
    }
}
