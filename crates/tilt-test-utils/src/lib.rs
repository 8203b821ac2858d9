//! Test utilities and fixtures for tilt development.
//!
//! Provides the sample boards the four variants were designed around,
//! small layout builders, and policy fixtures for exercising the settle
//! kernel without a real variant.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod layouts;

pub use fixtures::{FrozenPolicy, RecordingPolicy, SlideCell, SlidePolicy};
pub use layouts::{column_layout, row_layout};
