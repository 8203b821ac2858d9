//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] and [`AssemblyConfig`] are the builder inputs for
//! sessions. [`validate()`](SessionConfig::validate) checks that the
//! layout decodes under the variant's code table; session constructors
//! run the same check. A board with no playable cells is accepted and
//! simply never changes.

use std::error::Error;
use std::fmt;

use tilt_core::CellState;
use tilt_propagator::TransitionPolicy;
use tilt_propagators::AssemblyCell;
use tilt_space::{Grid, Layout, LayoutError};

// ── TiltMode ──────────────────────────────────────────────────────

/// How much movement one tilt gesture produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TiltMode {
    /// Run passes until nothing moves.
    #[default]
    Settle,
    /// Run exactly one pass; every particle advances at most one cell.
    SinglePass,
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The layout is malformed or uses a code the variant does not define.
    Layout(LayoutError),
    /// Canvas width or height is not finite and positive.
    InvalidCanvas {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Threshold fractions are not `0 <= near < far <= 1`.
    InvalidThresholds {
        /// Configured near fraction.
        near: f64,
        /// Configured far fraction.
        far: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::InvalidCanvas { width, height } => {
                write!(f, "canvas must be finite and positive, got {width} x {height}")
            }
            Self::InvalidThresholds { near, far } => {
                write!(f, "thresholds must satisfy 0 <= near < far <= 1, got {near} and {far}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

/// Decode `layout` under `C`'s code table.
pub(crate) fn decode<C: CellState>(layout: &Layout) -> Result<Grid<C>, ConfigError> {
    Ok(Grid::<C>::from_layout(layout)?)
}

// ── SessionConfig ─────────────────────────────────────────────────

/// Complete configuration for a direction-tilted session.
#[derive(Clone, Debug)]
pub struct SessionConfig<P> {
    /// Initial board.
    pub layout: Layout,
    /// Movement rule; also fixes the cell code table.
    pub policy: P,
    /// Movement per gesture. Default: [`TiltMode::Settle`].
    pub tilt_mode: TiltMode,
}

impl<P: TransitionPolicy> SessionConfig<P> {
    /// Configuration with the default tilt mode.
    pub fn new(layout: Layout, policy: P) -> Self {
        Self {
            layout,
            policy,
            tilt_mode: TiltMode::default(),
        }
    }

    /// Replace the tilt mode.
    pub fn with_tilt_mode(mut self, tilt_mode: TiltMode) -> Self {
        self.tilt_mode = tilt_mode;
        self
    }

    /// Check that the layout decodes under `P::Cell`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        decode::<P::Cell>(&self.layout).map(|_| ())
    }
}

// ── AssemblyConfig ────────────────────────────────────────────────

/// Configuration for an [`AssemblySession`](crate::AssemblySession).
///
/// Layout codes: `0` outside, `1` or `3` shape cell, `2` a tile placed
/// before play starts.
#[derive(Clone, Debug)]
pub struct AssemblyConfig {
    /// Target shape.
    pub layout: Layout,
}

impl AssemblyConfig {
    /// Wrap a layout.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Check that the layout decodes under the assembly code table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        decode::<AssemblyCell>(&self.layout).map(|_| ())
    }
}
