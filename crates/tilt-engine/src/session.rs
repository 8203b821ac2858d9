//! Direction-tilted puzzle sessions.
//!
//! [`TiltSession`] owns one board and its movement rule. Each tilt
//! gesture runs the settle kernel (or a single pass, per
//! [`TiltMode`]) and records [`SettleMetrics`].
//!
//! # Ownership model
//!
//! Every mutating method takes `&mut self` and [`grid()`](TiltSession::grid)
//! hands out `&Grid`, so a caller cannot tilt while holding a view of the
//! board. The borrow checker enforces the single-writer rule; there is no
//! runtime locking.

use std::time::Instant;

use tilt_core::{CellState, Direction};
use tilt_propagator::{pass, settle, SettleReport, TransitionPolicy};
use tilt_space::Grid;

use crate::config::{decode, ConfigError, SessionConfig, TiltMode};
use crate::metrics::SettleMetrics;

// Compile-time assertion: sessions can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<TiltSession<tilt_propagators::GatheringPolicy>>();
        assert_send::<TiltSession<tilt_propagators::MappingPolicy>>();
    }
};

/// A board plus the rule that moves its particles.
pub struct TiltSession<P: TransitionPolicy> {
    policy: P,
    pristine: Grid<P::Cell>,
    grid: Grid<P::Cell>,
    tilt_mode: TiltMode,
    last_metrics: SettleMetrics,
    gestures: u64,
}

impl<P: TransitionPolicy> TiltSession<P> {
    /// Decode the layout and build a session. Consumes the config.
    pub fn new(config: SessionConfig<P>) -> Result<Self, ConfigError> {
        let grid = decode::<P::Cell>(&config.layout)?;
        log::debug!(
            "{} session {}x{}, {} particles, {:?}",
            config.policy.name(),
            grid.columns(),
            grid.rows(),
            grid.occupied(),
            config.tilt_mode
        );
        Ok(Self {
            policy: config.policy,
            pristine: grid.clone(),
            grid,
            tilt_mode: config.tilt_mode,
            last_metrics: SettleMetrics::default(),
            gestures: 0,
        })
    }

    /// Tilt until nothing moves. Returns whether any cell changed.
    pub fn settle(&mut self, direction: Direction) -> bool {
        self.run(direction, |policy, grid| settle(policy, grid, direction))
    }

    /// Run one pass only. Returns whether any cell changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.run(direction, |policy, grid| SettleReport {
            passes: 1,
            transitions: pass(policy, grid, direction) as u64,
        })
    }

    /// Handle one gesture. `None` (no resolvable direction) is a no-op
    /// returning `false`; otherwise behaves as [`settle`](Self::settle) or
    /// [`step`](Self::step) according to the session's [`TiltMode`].
    pub fn tilt(&mut self, direction: Option<Direction>) -> bool {
        let Some(direction) = direction else {
            return false;
        };
        match self.tilt_mode {
            TiltMode::Settle => self.settle(direction),
            TiltMode::SinglePass => self.step(direction),
        }
    }

    fn run<F>(&mut self, direction: Direction, f: F) -> bool
    where
        F: FnOnce(&P, &mut Grid<P::Cell>) -> SettleReport,
    {
        let start = Instant::now();
        let report = f(&self.policy, &mut self.grid);
        let total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = SettleMetrics::from_report(report, total_us);
        self.gestures += 1;
        log::debug!(
            "{} tilt {direction}: {} passes, {} transitions in {total_us}us",
            self.policy.name(),
            report.passes,
            report.transitions
        );
        report.changed()
    }

    /// Return the board to its initial state, as the rule defines it.
    pub fn reset(&mut self) {
        self.policy.restore(&self.pristine, &mut self.grid);
        self.last_metrics = SettleMetrics::default();
        log::debug!("{} reset", self.policy.name());
    }

    /// Current board.
    pub fn grid(&self) -> &Grid<P::Cell> {
        &self.grid
    }

    /// Board as constructed.
    pub fn pristine(&self) -> &Grid<P::Cell> {
        &self.pristine
    }

    /// The movement rule.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Movement per gesture.
    pub fn tilt_mode(&self) -> TiltMode {
        self.tilt_mode
    }

    /// Metrics of the most recent gesture (zero after construction or reset).
    pub fn last_metrics(&self) -> SettleMetrics {
        self.last_metrics
    }

    /// Gestures handled since construction, excluding `None` tilts.
    pub fn gestures(&self) -> u64 {
        self.gestures
    }

    /// Cells currently holding a particle.
    pub fn occupied(&self) -> usize {
        self.grid.count(<P::Cell as CellState>::is_occupied)
    }
}
