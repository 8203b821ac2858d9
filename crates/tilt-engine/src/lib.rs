//! Puzzle sessions for the tilt simulation kernel.
//!
//! Provides [`TiltSession`] for the direction-tilted variants (gathering,
//! filling, mapping), [`AssemblySession`] for tile-by-tile assembly, their
//! configuration types, per-gesture metrics, and pointer-to-direction
//! resolution. Sessions are independent values; there is no global state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod config;
pub mod factory;
pub mod input;
pub mod metrics;
pub mod session;

pub use assembly::AssemblySession;
pub use config::{AssemblyConfig, ConfigError, SessionConfig, TiltMode};
pub use factory::{assembly, filling, gathering, mapping, merging_gathering};
pub use input::{AxisPriority, DirectionResolver, Pointer, ThresholdResolver};
pub use metrics::SettleMetrics;
pub use session::TiltSession;
