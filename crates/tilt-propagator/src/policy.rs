//! The [`TransitionPolicy`] trait.

use tilt_core::{CellState, Position};
use tilt_space::Grid;

/// A variant's single-step movement rule.
///
/// # Contract
///
/// - `try_move` advances a particle by at most one cell: it may write only
///   `from` and `to`. Reading other cells for legality checks is allowed.
/// - `try_move` returns `true` iff it changed the grid. The settle loop
///   stops on the first pass in which every call returned `false`.
/// - `&self`: policies are stateless; all state lives in the grid.
/// - `to` may lie outside the grid only if the caller ignores scan order;
///   [`settle`](crate::settle) never does this, and out-of-range reads
///   return `None` anyway.
///
/// # Examples
///
/// ```
/// use tilt_core::{CellState, Direction, Position};
/// use tilt_propagator::{settle, TransitionPolicy};
/// use tilt_space::{Grid, Layout};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Sand { Air, Grain }
///
/// impl CellState for Sand {
///     fn from_code(code: u8) -> Option<Self> {
///         match code { 0 => Some(Sand::Air), 1 => Some(Sand::Grain), _ => None }
///     }
///     fn code(self) -> u8 { self as u8 }
///     fn is_occupied(self) -> bool { self == Sand::Grain }
///     fn is_playable(self) -> bool { true }
/// }
///
/// struct Fall;
///
/// impl TransitionPolicy for Fall {
///     type Cell = Sand;
///     fn name(&self) -> &str { "fall" }
///     fn try_move(&self, grid: &mut Grid<Sand>, from: Position, to: Position) -> bool {
///         if grid.get(from) == Some(Sand::Grain) && grid.get(to) == Some(Sand::Air) {
///             grid.set(to, Sand::Grain);
///             grid.set(from, Sand::Air)
///         } else {
///             false
///         }
///     }
/// }
///
/// let mut grid: Grid<Sand> = Grid::from_layout(&Layout::parse("1\n0\n0").unwrap()).unwrap();
/// let report = settle(&Fall, &mut grid, Direction::South);
/// assert!(report.changed());
/// assert_eq!(grid.to_string(), "0\n0\n1");
/// ```
pub trait TransitionPolicy: Send + 'static {
    /// The variant's cell alphabet.
    type Cell: CellState;

    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Attempt to move the particle at `from` into `to`.
    fn try_move(&self, grid: &mut Grid<Self::Cell>, from: Position, to: Position) -> bool;

    /// Return `grid` to its initial state.
    ///
    /// `pristine` is the grid as it was right after construction. The
    /// default restores it verbatim; variants whose reset is rule-derived
    /// override this.
    fn restore(&self, pristine: &Grid<Self::Cell>, grid: &mut Grid<Self::Cell>) {
        grid.clone_from(pristine);
    }
}
