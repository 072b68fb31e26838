//! Minimum edge-length-sum arrangements of a tree, built directly (no
//! search): the projective, planar, and unconstrained interval-layout
//! constructions.
//!
//! Grounded on the original's recursive `__Dmin_Pr__optimal_interval_of`:
//! every vertex `r` (root included, no exception) is given a side
//! (`Left` or `Right`) to start from — the side it was itself placed on
//! relative to its own parent, or `Left` for the true root — and its
//! children, sorted descending by subtree size, are assigned one at a
//! time to the *current* side of the still-unconsumed range, which then
//! narrows from that end; the side alternates after each child. `r`
//! itself is placed wherever the range finally closes to a single
//! position. Each child recurses on its own block, starting from
//! whichever side it was just assigned to. This is one uniform
//! recursion; the root gets no special-cased treatment beyond always
//! starting on the left.
//!
//! `spec.md` §6: "Projective Dmin: call arrange(L, root, NONE, 0, n-1,
//! π). Planar Dmin: same recursion on the centroid-rooted free tree."
//! The two therefore differ only in which vertex is handed to this
//! engine as the root — the caller's choice for projective, the
//! centroid for planar. It is a classical fact that for trees the
//! planarity-unconstrained minimum coincides with the planar one, so
//! [`minimum_arrangement_unconstrained`] reuses the same construction.

use std::cmp::Reverse;

use crate::linarr::arrangement::LinearArrangement;
use crate::linarr::predicates::sum_edge_lengths;
use crate::topology::{centroid, compute_subtree_sizes};
use crate::tree::{FreeTree, RootedTree};
use crate::Node;

/// Build the projective-minimal arrangement of `rt`: `rt.root()` is
/// fixed as the tree's root, and the arrangement is the minimum one
/// keeping every subtree a contiguous block of positions.
///
/// # Panics
/// If `rt.num_nodes() == 0`.
#[must_use]
pub fn minimum_arrangement_projective(rt: &RootedTree) -> (u64, LinearArrangement) {
    let n = rt.num_nodes();
    assert!(n > 0, "cannot arrange an empty tree");

    let mut rt = rt.clone();
    compute_subtree_sizes(&mut rt);

    let mut vertex_at = vec![0 as Node; n];
    assign_interval(&rt, rt.root(), Side::Left, 0, n - 1, &mut vertex_at);
    let arr = LinearArrangement::from_vertex_at(vertex_at);

    let d = sum_edge_lengths_of_rooted(&rt, &arr);
    (d, arr)
}

/// Build the planar-minimal arrangement of `t`: the same construction,
/// rooted at the centroid (the one choice of root guaranteed to give the
/// true planar minimum, not merely a projective one for an arbitrary
/// root).
#[must_use]
pub fn minimum_arrangement_planar(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n == 0 {
        return (0, LinearArrangement::identity(0));
    }
    let (c, _) = centroid(t);
    let rt = t.root_at(c);
    minimum_arrangement_projective(&rt)
}

/// The globally minimum edge-length sum over every permutation, with no
/// planarity requirement. For trees this coincides with the planar
/// minimum (`SPEC_FULL.md` §4 / `spec.md` glossary).
#[must_use]
pub fn minimum_arrangement_unconstrained(t: &FreeTree) -> (u64, LinearArrangement) {
    minimum_arrangement_planar(t)
}

/// Which end of the remaining range a vertex was placed relative to its
/// own parent (or `Left` for the true root, which has no parent side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Recursively lay out the subtree rooted at `u` inside `[lo, hi]`.
///
/// `u`'s children, sorted descending by subtree size, are assigned one
/// at a time to the current side of the still-unconsumed sub-range
/// (starting at `start_side`), which then narrows from that end; the
/// side alternates after every child. `u` itself is placed wherever the
/// range finally closes to the single position both ends converge on.
/// Each child recurses on its own block, starting from the side it was
/// just assigned to — so the alternation carried by a vertex placed on
/// the right continues rightward one level down, and likewise for left.
fn assign_interval(rt: &RootedTree, u: Node, start_side: Side, lo: usize, hi: usize, vertex_at: &mut [Node]) {
    let mut children: Vec<Node> = rt.out_neighbors(u).to_vec();
    children.sort_by_key(|&c| Reverse(rt.subtree_size(c)));

    let mut side = start_side;
    let mut ini = lo;
    let mut fin = hi;
    for &c in &children {
        let s = rt.subtree_size(c) as usize;
        match side {
            Side::Left => {
                assign_interval(rt, c, Side::Left, ini, ini + s - 1, vertex_at);
                ini += s;
            }
            Side::Right => {
                assign_interval(rt, c, Side::Right, fin - s + 1, fin, vertex_at);
                fin -= s;
            }
        }
        side = side.other();
    }
    debug_assert_eq!(ini, fin, "children did not exactly fill [lo, hi]");
    vertex_at[ini] = u;
}

/// [`sum_edge_lengths`]-equivalent computed directly over a
/// [`RootedTree`]'s parent/child edges (it does not implement
/// [`crate::graph::Neighbors`], since it is directed).
fn sum_edge_lengths_of_rooted(rt: &RootedTree, arr: &LinearArrangement) -> u64 {
    let n = rt.num_nodes();
    let mut total = 0u64;
    for u in 0..n {
        for &c in rt.out_neighbors(u) {
            let pu = arr.position(u) as i64;
            let pc = arr.position(c) as i64;
            total += (pu - pc).unsigned_abs();
        }
    }
    total
}
