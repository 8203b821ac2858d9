//! Tile-by-tile shape assembly with undo.
//!
//! Unlike the tilted variants, assembly has no direction: the player picks
//! a candidate cell, a tile is placed there, and candidacy is recomputed
//! for the whole shape. Placements are kept in an ordered, duplicate-free
//! history so they can be undone one at a time.

use indexmap::IndexSet;
use tilt_core::Position;
use tilt_propagators::{evaluate_reachability, AssemblyCell};
use tilt_space::Grid;

use crate::config::{decode, AssemblyConfig, ConfigError};

/// An assembly board with its placement history.
///
/// Initial state: tiles given in the layout stay placed and every other
/// shape cell is a candidate, so the first tile may go anywhere. Candidacy
/// is first evaluated after the first placement.
///
/// # Invariant
///
/// The cells in [`history()`](AssemblySession::history) are exactly the
/// occupied cells that were not occupied initially.
pub struct AssemblySession {
    initial: Grid<AssemblyCell>,
    grid: Grid<AssemblyCell>,
    history: IndexSet<Position>,
}

impl AssemblySession {
    /// Decode the layout and build the initial state.
    pub fn new(config: AssemblyConfig) -> Result<Self, ConfigError> {
        let mut initial = decode::<AssemblyCell>(&config.layout)?;
        initial.replace(AssemblyCell::Vacant, AssemblyCell::Candidate);
        log::debug!(
            "assembly session {}x{}, {} shape cells, {} seeded tiles",
            initial.columns(),
            initial.rows(),
            initial.count(AssemblyCell::in_shape),
            initial.occupied()
        );
        Ok(Self {
            grid: initial.clone(),
            initial,
            history: IndexSet::new(),
        })
    }

    /// Place a tile on `pos` if it is a candidate, then re-evaluate.
    ///
    /// Returns `false` and changes nothing for any other cell, including
    /// positions outside the board.
    pub fn place(&mut self, pos: Position) -> bool {
        if self.grid.get(pos) != Some(AssemblyCell::Candidate) {
            return false;
        }
        self.grid.set(pos, AssemblyCell::Occupied);
        self.history.insert(pos);
        let candidates = evaluate_reachability(&mut self.grid);
        log::debug!("placed {pos}, {candidates} candidates");
        true
    }

    /// Remove the most recent tile.
    ///
    /// Returns `false` if there is nothing to undo. Removing the last
    /// placed tile resets the board.
    pub fn undo(&mut self) -> bool {
        let Some(pos) = self.history.pop() else {
            return false;
        };
        self.grid.set(pos, AssemblyCell::Candidate);
        if self.history.is_empty() {
            self.reset();
        } else {
            let candidates = evaluate_reachability(&mut self.grid);
            log::debug!("undid {pos}, {candidates} candidates");
        }
        true
    }

    /// Restore the initial state and clear history.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.initial);
        self.history.clear();
        log::debug!("assembly reset");
    }

    /// Recompute candidacy now. Returns the number of candidates.
    pub fn evaluate_reachability(&mut self) -> usize {
        evaluate_reachability(&mut self.grid)
    }

    /// Current board.
    pub fn grid(&self) -> &Grid<AssemblyCell> {
        &self.grid
    }

    /// Board as it was after construction.
    pub fn initial(&self) -> &Grid<AssemblyCell> {
        &self.initial
    }

    /// Placed tiles, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.history.iter().copied()
    }

    /// The tile `undo` would remove.
    pub fn last_placed(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Cells that can take the next tile.
    pub fn candidate_count(&self) -> usize {
        self.grid.count(|c| c == AssemblyCell::Candidate)
    }

    /// Whether every shape cell holds a tile.
    pub fn is_complete(&self) -> bool {
        self.grid.count(AssemblyCell::is_open) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt_space::Layout;

    fn session(text: &str) -> AssemblySession {
        AssemblySession::new(AssemblyConfig::new(Layout::parse(text).unwrap())).unwrap()
    }

    #[test]
    fn first_tile_may_go_anywhere() {
        let s = session("110\n011");
        assert_eq!(s.candidate_count(), 4);
        assert_eq!(s.grid().to_string(), "330\n033");
    }

    #[test]
    fn placement_reevaluates() {
        let mut s = session("111\n111\n111");
        assert!(s.place(Position::new(1, 1)));
        assert_eq!(s.grid().to_string(), "131\n323\n131");
        assert_eq!(s.history().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn non_candidate_placement_is_a_no_op() {
        let mut s = session("111\n111\n111");
        s.place(Position::new(1, 1));
        let before = s.grid().clone();
        assert!(!s.place(Position::new(0, 0)), "vacant");
        assert!(!s.place(Position::new(1, 1)), "occupied");
        assert!(!s.place(Position::new(5, 5)), "off board");
        assert_eq!(s.grid(), &before);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut s = session("11");
        assert!(!s.undo());
        assert_eq!(s.grid(), s.initial());
    }

    #[test]
    fn undo_last_tile_resets() {
        let mut s = session("111\n111");
        s.place(Position::new(0, 0));
        s.place(Position::new(1, 0));
        assert!(s.undo());
        assert_eq!(s.last_placed(), Some(Position::new(0, 0)));
        assert_eq!(s.grid().get(Position::new(1, 0)), Some(AssemblyCell::Candidate));
        assert!(s.undo());
        assert_eq!(s.grid(), s.initial());
        assert_eq!(s.history().len(), 0);
    }

    #[test]
    fn seeded_tiles_leave_the_first_placement_open() {
        let mut s = session("111\n121\n111");
        assert_eq!(s.candidate_count(), 8);
        assert_eq!(s.grid().to_string(), "333\n323\n333");
        assert!(s.place(Position::new(0, 0)));
        assert_eq!(s.grid().to_string(), "231\n323\n131");
        assert!(s.undo());
        assert_eq!(s.grid().to_string(), "333\n323\n333");
        assert_eq!(s.grid(), s.initial());
    }

    #[test]
    fn completes_a_domino() {
        let mut s = session("11");
        assert!(s.place(Position::new(0, 0)));
        assert!(!s.is_complete());
        assert!(s.place(Position::new(1, 0)));
        assert!(s.is_complete());
        assert_eq!(s.candidate_count(), 0);
    }

    #[test]
    fn explicit_evaluation_counts_candidates() {
        let mut s = session("1111");
        assert_eq!(s.evaluate_reachability(), 0);
        assert_eq!(s.candidate_count(), 0);
        s.reset();
        assert_eq!(s.candidate_count(), 4);
    }
}
