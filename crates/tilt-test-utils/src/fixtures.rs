//! Reusable policy fixtures.
//!
//! - [`SlidePolicy`]: the plainest possible tilt rule over [`SlideCell`].
//! - [`FrozenPolicy`]: never moves anything.
//! - [`RecordingPolicy`]: wraps another policy and logs every probe.

use std::cell::RefCell;
use std::marker::PhantomData;
use tilt_core::{CellState, Position};
use tilt_propagator::TransitionPolicy;
use tilt_space::Grid;

/// Three-state alphabet: `0` wall, `1` open, `2` particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideCell {
    Wall,
    Open,
    Particle,
}

impl CellState for SlideCell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SlideCell::Wall),
            1 => Some(SlideCell::Open),
            2 => Some(SlideCell::Particle),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn is_occupied(self) -> bool {
        self == SlideCell::Particle
    }

    fn is_playable(self) -> bool {
        self != SlideCell::Wall
    }
}

/// A particle moves into an open destination. Nothing else happens.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlidePolicy;

impl TransitionPolicy for SlidePolicy {
    type Cell = SlideCell;

    fn name(&self) -> &str {
        "slide"
    }

    fn try_move(&self, grid: &mut Grid<SlideCell>, from: Position, to: Position) -> bool {
        if grid.get(from) == Some(SlideCell::Particle) && grid.get(to) == Some(SlideCell::Open) {
            grid.set(to, SlideCell::Particle);
            grid.set(from, SlideCell::Open);
            true
        } else {
            false
        }
    }
}

/// Rejects every move. Settling under it always takes exactly one pass.
pub struct FrozenPolicy<C> {
    _cell: PhantomData<fn() -> C>,
}

impl<C> FrozenPolicy<C> {
    pub fn new() -> Self {
        Self { _cell: PhantomData }
    }
}

impl<C> Default for FrozenPolicy<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CellState> TransitionPolicy for FrozenPolicy<C> {
    type Cell = C;

    fn name(&self) -> &str {
        "frozen"
    }

    fn try_move(&self, _grid: &mut Grid<C>, _from: Position, _to: Position) -> bool {
        false
    }
}

/// Delegates to an inner policy and records every `(from, to)` probe.
///
/// Useful for asserting scan order and pass counts. Uses `RefCell`, so it
/// satisfies `Send` but not `Sync`; the kernel only needs the former.
pub struct RecordingPolicy<P> {
    inner: P,
    probes: RefCell<Vec<(Position, Position)>>,
}

impl<P: TransitionPolicy> RecordingPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            probes: RefCell::new(Vec::new()),
        }
    }

    /// All probes so far, oldest first.
    pub fn probes(&self) -> Vec<(Position, Position)> {
        self.probes.borrow().clone()
    }

    /// Number of probes so far.
    pub fn calls(&self) -> usize {
        self.probes.borrow().len()
    }

    /// Forget recorded probes.
    pub fn clear(&self) {
        self.probes.borrow_mut().clear();
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: TransitionPolicy> TransitionPolicy for RecordingPolicy<P> {
    type Cell = P::Cell;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn try_move(&self, grid: &mut Grid<P::Cell>, from: Position, to: Position) -> bool {
        self.probes.borrow_mut().push((from, to));
        self.inner.try_move(grid, from, to)
    }

    fn restore(&self, pristine: &Grid<P::Cell>, grid: &mut Grid<P::Cell>) {
        self.inner.restore(pristine, grid);
    }
}
