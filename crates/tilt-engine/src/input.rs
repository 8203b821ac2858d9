//! Mapping pointer positions to tilt directions.
//!
//! The kernel only consumes a [`Direction`]. Turning a click or touch into
//! one is a collaborator concern behind [`DirectionResolver`]; the
//! [`ThresholdResolver`] provided here splits the canvas into border bands.

use tilt_core::Direction;

use crate::config::ConfigError;

/// A pointer position in canvas coordinates; `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    /// Horizontal offset from the canvas's left edge.
    pub x: f64,
    /// Vertical offset from the canvas's top edge.
    pub y: f64,
}

impl Pointer {
    /// Create a pointer position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Resolves a pointer position to a tilt direction, if any.
pub trait DirectionResolver {
    /// `None` means the gesture does not tilt.
    fn resolve(&self, pointer: Pointer) -> Option<Direction>;
}

impl<F> DirectionResolver for F
where
    F: Fn(Pointer) -> Option<Direction>,
{
    fn resolve(&self, pointer: Pointer) -> Option<Direction> {
        self(pointer)
    }
}

/// Which axis wins when a pointer sits in two border bands at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisPriority {
    /// North/south bands are checked before west/east.
    #[default]
    VerticalFirst,
    /// West/east bands are checked before north/south.
    HorizontalFirst,
}

/// Border-band resolver.
///
/// A pointer within `near * extent` of the top or left edge resolves to
/// north or west; beyond `far * extent` it resolves to south or east.
/// The middle of the canvas and anything outside it resolve to `None`.
///
/// ```
/// use tilt_core::Direction;
/// use tilt_engine::{DirectionResolver, Pointer, ThresholdResolver};
///
/// let r = ThresholdResolver::new(100.0, 50.0).unwrap();
/// assert_eq!(r.resolve(Pointer::new(50.0, 2.0)), Some(Direction::North));
/// assert_eq!(r.resolve(Pointer::new(95.0, 25.0)), Some(Direction::East));
/// assert_eq!(r.resolve(Pointer::new(50.0, 25.0)), None);
/// assert_eq!(r.resolve(Pointer::new(-1.0, 25.0)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdResolver {
    width: f64,
    height: f64,
    near: f64,
    far: f64,
    priority: AxisPriority,
}

impl ThresholdResolver {
    /// Default near-band fraction.
    pub const DEFAULT_NEAR: f64 = 0.2;
    /// Default far-band fraction.
    pub const DEFAULT_FAR: f64 = 0.8;

    /// Resolver for a `width` x `height` canvas with default bands and
    /// vertical priority.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            priority: AxisPriority::default(),
        })
    }

    /// Replace the band fractions. Requires `0 <= near < far <= 1`.
    pub fn with_thresholds(mut self, near: f64, far: f64) -> Result<Self, ConfigError> {
        if !((0.0..=1.0).contains(&near) && (0.0..=1.0).contains(&far) && near < far) {
            return Err(ConfigError::InvalidThresholds { near, far });
        }
        self.near = near;
        self.far = far;
        Ok(self)
    }

    /// Replace the axis priority.
    pub fn with_priority(mut self, priority: AxisPriority) -> Self {
        self.priority = priority;
        self
    }

    /// `(width, height)`.
    pub fn canvas(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Configured axis priority.
    pub fn priority(&self) -> AxisPriority {
        self.priority
    }

    fn vertical(&self, y: f64) -> Option<Direction> {
        if y < self.near * self.height {
            Some(Direction::North)
        } else if y > self.far * self.height {
            Some(Direction::South)
        } else {
            None
        }
    }

    fn horizontal(&self, x: f64) -> Option<Direction> {
        if x < self.near * self.width {
            Some(Direction::West)
        } else if x > self.far * self.width {
            Some(Direction::East)
        } else {
            None
        }
    }
}

impl DirectionResolver for ThresholdResolver {
    fn resolve(&self, pointer: Pointer) -> Option<Direction> {
        let Pointer { x, y } = pointer;
        // Comparisons are false for NaN, so NaN pointers fall out here too.
        if !((0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)) {
            return None;
        }
        match self.priority {
            AxisPriority::VerticalFirst => self.vertical(y).or_else(|| self.horizontal(x)),
            AxisPriority::HorizontalFirst => self.horizontal(x).or_else(|| self.vertical(y)),
        }
    }
}
