//! Maximum-`D` search: Branch & Bound over linear arrangements, bounded by
//! a generic rearrangement bound and pruned by necessary conditions on
//! per-vertex level, with an exact shortcut once no suffix-internal edges
//! remain.
//!
//! Grounded on `spec.md` §4.8.

pub mod bnb;
pub mod discard;
pub mod registry;

pub use bnb::{maximum_arrangement_unconstrained, maximum_arrangement_with_first_node, BnBConfig, Solver};
pub use discard::{NextAction, ReasonDiscard};
pub use registry::{ArrangementClass, MaximumArrangementRegistry};
