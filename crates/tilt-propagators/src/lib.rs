//! Variant rules for the tilt simulation kernel.
//!
//! Each variant is a cell alphabet plus either a
//! [`TransitionPolicy`](tilt_propagator::TransitionPolicy) driven by
//! [`settle`](tilt_propagator::settle), or (for assembly) a reachability
//! evaluator that runs after every placement.
//!
//! | Variant    | Cells            | Rule                                  |
//! |------------|------------------|---------------------------------------|
//! | gathering  | [`GatherCell`]   | [`GatheringPolicy`]                   |
//! | filling    | [`FillCell`]     | [`FillingPolicy`]                     |
//! | mapping    | [`MapCell`]      | [`MappingPolicy`]                     |
//! | assembly   | [`AssemblyCell`] | [`evaluate_reachability`]             |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assembly;
pub mod filling;
pub mod gathering;
pub mod mapping;

pub use assembly::{
    docking_neighbours, evaluate_reachability, is_dockable, is_reachable, is_reachable_from,
    AssemblyCell, Extremes,
};
pub use filling::{FillCell, FillingPolicy};
pub use gathering::{GatherCell, GatheringPolicy};
pub use mapping::{MapCell, MappingPolicy};
