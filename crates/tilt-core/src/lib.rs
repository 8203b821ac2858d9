//! Core types and traits for the tilt puzzle simulation kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the tilt workspace:
//! cell positions, tilt directions, the [`CellState`] trait every variant
//! alphabet implements, and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod traits;

pub use direction::Direction;
pub use error::ParseDirectionError;
pub use id::Position;
pub use traits::CellState;
