//! Per-gesture metrics for tilt sessions.

use tilt_propagator::SettleReport;

/// Timing and work done by the most recent tilt.
///
/// Durations are in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleMetrics {
    /// Wall-clock time for the whole gesture, in microseconds.
    pub total_us: u64,
    /// Passes run, including the final pass that changed nothing.
    pub passes: u32,
    /// Successful cell transitions.
    pub transitions: u64,
}

impl SettleMetrics {
    pub(crate) fn from_report(report: SettleReport, total_us: u64) -> Self {
        Self {
            total_us,
            passes: report.passes,
            transitions: report.transitions,
        }
    }
}
