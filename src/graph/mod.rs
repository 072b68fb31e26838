//! Graph models: [`UndirectedGraph`] and [`DirectedGraph`].
//!
//! Both types store a fixed number of vertices `n`, fixed at construction,
//! and per-vertex neighbor sequences. Neither allows self-loops or parallel
//! edges; violating either is a programming error (see the crate-level
//! error handling notes) and is caught by a `debug_assert!` rather than
//! surfaced as a `Result`.

mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use crate::Node;

/// Capabilities common to every graph and tree representation in the
/// crate, no matter how the adjacency is actually stored.
///
/// Algorithms that only need "how many vertices" and "is this a directed
/// structure" are written against this trait instead of matching on a
/// graph-kind enum (see `SPEC_FULL.md` §3 / `spec.md` §9 for why: this
/// replaces the virtual dispatch the original C++ used for graph kind).
pub trait GraphBase {
    /// Number of vertices. Fixed for the lifetime of the value.
    fn num_nodes(&self) -> usize;

    /// Whether this structure distinguishes outgoing from incoming edges.
    fn is_directed(&self) -> bool;
}

/// Capability for structures that expose a single, symmetric neighbor
/// list per vertex (undirected graphs, free trees).
pub trait Neighbors: GraphBase {
    /// Neighbors of `u`, in storage order (ascending iff the structure is
    /// normalized).
    fn neighbors(&self, u: Node) -> &[Node];

    /// Degree of `u`, i.e. `neighbors(u).len()`.
    fn degree(&self, u: Node) -> usize {
        self.neighbors(u).len()
    }
}

/// Capability for structures with directed edges (directed graphs, rooted
/// trees oriented away from the root).
pub trait DirectedNeighbors: GraphBase {
    /// Heads of edges outgoing from `u`.
    fn out_neighbors(&self, u: Node) -> &[Node];
    /// Tails of edges incoming to `u`.
    fn in_neighbors(&self, u: Node) -> &[Node];

    /// Out-degree of `u`.
    fn out_degree(&self, u: Node) -> usize {
        self.out_neighbors(u).len()
    }
    /// In-degree of `u`.
    fn in_degree(&self, u: Node) -> usize {
        self.in_neighbors(u).len()
    }
    /// Total degree, i.e. out-degree plus in-degree.
    fn degree(&self, u: Node) -> usize {
        self.out_degree(u) + self.in_degree(u)
    }
}

/// An error returned by the fallible tree constructors that validate
/// externally-supplied shapes (an edge list or a head vector).
///
/// These are the one category of "error" the core core does surface as a
/// `Result`: the input is not a programming precondition under the
/// caller's control (it usually came from a file), so panicking on it
/// would be hostile. Everything *else* in the crate that would be a
/// precondition violation (self-loop, duplicate edge, out-of-range
/// vertex) is an `assert!`/`debug_assert!` instead, per `spec.md` §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeConstructionError {
    /// The edge set contains a cycle, or does not span all vertices.
    NotAcyclic,
    /// A tree on `n` vertices must have exactly `n - 1` edges.
    WrongEdgeCount {
        /// Number of vertices.
        num_nodes: usize,
        /// Number of edges actually supplied.
        num_edges: usize,
    },
    /// A head vector named more than one vertex as the root (more than one
    /// zero entry).
    MultipleRoots,
    /// A head vector named no vertex as the root, but the caller did not
    /// separately designate one.
    NoRoot,
}

impl std::fmt::Display for TreeConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAcyclic => write!(f, "edge set is not acyclic or does not span all vertices"),
            Self::WrongEdgeCount { num_nodes, num_edges } => write!(
                f,
                "a tree on {num_nodes} vertices needs {} edges, got {num_edges}",
                num_nodes.saturating_sub(1)
            ),
            Self::MultipleRoots => write!(f, "head vector designates more than one root"),
            Self::NoRoot => write!(f, "head vector designates no root"),
        }
    }
}

impl std::error::Error for TreeConstructionError {}

/// Validate `u` and `v` as a candidate edge for a graph of `n` vertices:
/// in range, and not a self-loop. Shared by both graph kinds.
#[inline]
pub(crate) fn assert_valid_edge(n: usize, u: Node, v: Node) {
    debug_assert!(u < n, "vertex {u} out of range for a graph of {n} vertices");
    debug_assert!(v < n, "vertex {v} out of range for a graph of {n} vertices");
    debug_assert!(u != v, "self-loops are not allowed ({u}, {u})");
}
