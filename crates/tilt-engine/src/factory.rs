//! One-call constructors for each variant with default settings.
//!
//! Pointer input is configured separately. Gathering boards are usually
//! driven with the default [`AxisPriority::VerticalFirst`]; filling and
//! mapping boards with [`AxisPriority::HorizontalFirst`].
//!
//! [`AxisPriority::VerticalFirst`]: crate::AxisPriority::VerticalFirst
//! [`AxisPriority::HorizontalFirst`]: crate::AxisPriority::HorizontalFirst

use tilt_propagators::{FillingPolicy, GatheringPolicy, MappingPolicy};
use tilt_space::Layout;

use crate::assembly::AssemblySession;
use crate::config::{AssemblyConfig, ConfigError, SessionConfig};
use crate::session::TiltSession;

/// Gathering session; particles block each other.
pub fn gathering(layout: Layout) -> Result<TiltSession<GatheringPolicy>, ConfigError> {
    TiltSession::new(SessionConfig::new(layout, GatheringPolicy::blocking()))
}

/// Gathering session; particles that collide merge.
pub fn merging_gathering(layout: Layout) -> Result<TiltSession<GatheringPolicy>, ConfigError> {
    TiltSession::new(SessionConfig::new(layout, GatheringPolicy::merging()))
}

/// Filling session.
///
/// Pair with a [`ThresholdResolver`](crate::ThresholdResolver) using
/// [`AxisPriority::HorizontalFirst`](crate::AxisPriority::HorizontalFirst)
/// so corner clicks resolve west/east.
pub fn filling(layout: Layout) -> Result<TiltSession<FillingPolicy>, ConfigError> {
    TiltSession::new(SessionConfig::new(layout, FillingPolicy))
}

/// Mapping session.
///
/// Like [`filling`], corner clicks resolve west/east with
/// [`AxisPriority::HorizontalFirst`](crate::AxisPriority::HorizontalFirst).
pub fn mapping(layout: Layout) -> Result<TiltSession<MappingPolicy>, ConfigError> {
    TiltSession::new(SessionConfig::new(layout, MappingPolicy))
}

/// Assembly session.
pub fn assembly(layout: Layout) -> Result<AssemblySession, ConfigError> {
    AssemblySession::new(AssemblyConfig::new(layout))
}
