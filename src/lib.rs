//! Exact and approximate costs, enumeration, and optimal construction of
//! linear arrangements of graphs and trees.
//!
//! A *linear arrangement* maps each vertex of a graph to a distinct
//! integer position. This crate computes the two classic cost functions
//! over such arrangements — the sum of edge lengths (`D`) and the number
//! of crossings (`C`) — and constructs arrangements that minimize or
//! maximize them under various structural constraints (projective,
//! planar, unconstrained), plus supporting structural analysis (tree
//! isomorphism, chunking, dependency flux).
//!
//! # Error handling
//! Most preconditions in this crate (vertex indices in range, no
//! self-loops, no duplicate edges) are programming errors: they are
//! caught with `assert!`/`debug_assert!`, not surfaced as `Result`. The
//! one exception is building a tree from externally supplied data (an
//! edge list or a parent/head vector), where a malformed shape is a
//! legitimate runtime condition; see [`graph::TreeConstructionError`].
//!
//! # Logging
//! Mutating operations on the graph types emit `debug`-level messages via
//! the [`log`] crate's facade. Nothing in this crate initializes a
//! logging backend; the embedding application does that (e.g. via
//! `env_logger::init`).
//!
//! # Feature flags
//! - `quickcheck`: implements [`quickcheck::Arbitrary`] for [`tree::FreeTree`]
//!   and [`linarr::LinearArrangement`], used by the property tests under
//!   `tests/`.

/// Vertex identifier: a dense index into `0..n`.
pub type Node = usize;

pub mod graph;
pub mod isomorphism;
pub mod level;
pub mod linarr;
pub mod topology;
pub mod tree;
pub mod visit;

mod linear_set;
mod sorting;

#[cfg(feature = "quickcheck")]
mod quickcheck_impls;
