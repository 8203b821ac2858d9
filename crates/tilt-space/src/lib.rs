//! Cell grids, layouts and direction geometry for tilt simulations.
//!
//! This crate owns the three pieces of state every variant shares:
//!
//! - [`Layout`]: the validated rectangular integer matrix a puzzle is
//!   described with, parsed from literals or text.
//! - [`Grid`]: fixed-size storage of a variant's cell states with
//!   bounds-checked access. Out-of-range reads return `None`.
//! - [`ScanOrder`]: the per-direction visiting order that lets a single
//!   sweep move a chain of particles as a block.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod layout;
pub mod scan;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LayoutError;
pub use grid::Grid;
pub use layout::Layout;
pub use scan::{scan_order, ScanOrder};
