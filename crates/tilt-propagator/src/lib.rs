//! Transition policy trait and settle algorithm for tilt simulations.
//!
//! A [`TransitionPolicy`] decides, for one source cell and its neighbour in
//! the travel direction, whether a particle moves and what both cells become.
//! [`settle`] drives whole-grid passes of a policy in scan order until a pass
//! changes nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod policy;
pub mod settle;

pub use policy::TransitionPolicy;
pub use settle::{pass, settle, SettleReport};
