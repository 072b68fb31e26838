//! Linear arrangements: the permutation type itself, the cost functions
//! and structural predicates over it, the direct minimum-`D` interval
//! construction, the maximum-`D` Branch & Bound solver, and the
//! positional-analysis modules (dependency flux, chunking) built on top.

pub mod arrangement;
pub mod chunking;
pub mod dmax;
pub mod dmin;
pub mod flux;
pub mod predicates;

pub use arrangement::LinearArrangement;
