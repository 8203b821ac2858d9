//! Whole-grid passes and the fixed-point settle loop.

use crate::policy::TransitionPolicy;
use tilt_core::Direction;
use tilt_space::{scan_order, Grid};

/// Outcome of one [`settle`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleReport {
    /// Passes run, including the final pass that changed nothing.
    pub passes: u32,
    /// Successful `try_move` calls across all passes.
    pub transitions: u64,
}

impl SettleReport {
    /// Whether any cell changed.
    pub fn changed(&self) -> bool {
        self.transitions > 0
    }
}

/// Run exactly one pass: every source in scan order, once.
///
/// Returns the number of successful transitions.
pub fn pass<P>(policy: &P, grid: &mut Grid<P::Cell>, direction: Direction) -> usize
where
    P: TransitionPolicy + ?Sized,
{
    let mut moved = 0;
    for from in scan_order(direction, grid.columns(), grid.rows()) {
        if policy.try_move(grid, from, from.step(direction)) {
            moved += 1;
        }
    }
    log::trace!("{} pass {direction}: {moved} transitions", policy.name());
    moved
}

/// Repeat passes until one makes no transition.
///
/// Terminates for every policy that moves particles strictly towards the
/// border or changes a cell into a state it never leaves; all shipped
/// variants satisfy this. A grid already at rest costs a single pass.
pub fn settle<P>(policy: &P, grid: &mut Grid<P::Cell>, direction: Direction) -> SettleReport
where
    P: TransitionPolicy + ?Sized,
{
    let mut report = SettleReport::default();
    loop {
        let moved = pass(policy, grid, direction);
        report.passes += 1;
        report.transitions += moved as u64;
        if moved == 0 {
            break;
        }
    }
    log::debug!(
        "{} settled {direction} in {} passes ({} transitions)",
        policy.name(),
        report.passes,
        report.transitions
    );
    report
}
