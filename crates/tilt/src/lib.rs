//! Tilt: a simulation kernel for grid tilt puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! tilt sub-crates. For most users, adding `tilt` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tilt::prelude::*;
//!
//! let layout = Layout::parse("
//!     0111
//!     1212
//!     1110
//! ").unwrap();
//!
//! let mut session = tilt::engine::gathering(layout).unwrap();
//! assert!(session.settle(Direction::West));
//! assert_eq!(session.grid().to_string(), "0111\n2211\n1110");
//! assert_eq!(session.occupied(), 2);
//!
//! // Pointer in the bottom band of a 300x200 canvas tilts south.
//! let resolver = ThresholdResolver::new(300.0, 200.0).unwrap();
//! let dir = resolver.resolve(Pointer::new(150.0, 190.0));
//! assert_eq!(dir, Some(Direction::South));
//! session.tilt(dir);
//! assert_eq!(session.grid().to_string(), "0111\n1111\n2210");
//!
//! session.reset();
//! assert_eq!(session.grid(), session.pristine());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilt-core` | Positions, directions, the `CellState` trait |
//! | [`space`] | `tilt-space` | Layouts, grids and scan order |
//! | [`propagator`] | `tilt-propagator` | Transition policy trait and settle kernel |
//! | [`propagators`] | `tilt-propagators` | Gathering, filling, mapping and assembly rules |
//! | [`engine`] | `tilt-engine` | Sessions, configuration and pointer input |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tilt-core`).
///
/// [`types::Position`], [`types::Direction`] and the
/// [`types::CellState`] trait every cell alphabet implements.
pub use tilt_core as types;

/// Layouts, grids and scan order (`tilt-space`).
pub use tilt_space as space;

/// Transition policy trait and settle kernel (`tilt-propagator`).
///
/// [`propagator::TransitionPolicy`] is the extension point for custom
/// movement rules.
pub use tilt_propagator as propagator;

/// The four puzzle rules (`tilt-propagators`).
pub use tilt_propagators as propagators;

/// Puzzle sessions (`tilt-engine`).
///
/// [`engine::TiltSession`] for the tilted variants,
/// [`engine::AssemblySession`] for tile placement.
pub use tilt_engine as engine;

/// Common imports for typical tilt usage.
///
/// ```rust
/// use tilt::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use tilt_core::{CellState, Direction, Position};

    // Space
    pub use tilt_space::{Grid, Layout, LayoutError};

    // Kernel
    pub use tilt_propagator::{settle, SettleReport, TransitionPolicy};

    // Rules and cell alphabets
    pub use tilt_propagators::{
        AssemblyCell, FillCell, FillingPolicy, GatherCell, GatheringPolicy, MapCell,
        MappingPolicy,
    };

    // Engine
    pub use tilt_engine::{
        AssemblyConfig, AssemblySession, AxisPriority, ConfigError, DirectionResolver, Pointer,
        SessionConfig, SettleMetrics, ThresholdResolver, TiltMode, TiltSession,
    };
}
