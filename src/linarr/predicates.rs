//! Cost functions and structural predicates over an arrangement.
//!
//! `sum_edge_lengths` and `num_crossings` are the concrete `D(G, π)` and
//! `C(G, π)` the distilled spec leaves implicit (`SPEC_FULL.md` §4);
//! `num_crossings` follows the original's pairwise-interleave brute force
//! (`lal/internal/graphs/C_brute_force.cpp`): for every pair of edges with
//! disjoint endpoint positions, check whether their position intervals
//! interleave.

use crate::graph::{DirectedNeighbors, GraphBase, Neighbors};
use crate::linarr::arrangement::LinearArrangement;
use crate::tree::RootedTree;
use crate::Node;

/// Sum, over every edge `{u, v}` of `g`, of `|π(u) - π(v)|`.
#[must_use]
pub fn sum_edge_lengths(g: &impl Neighbors, arr: &LinearArrangement) -> u64 {
    let n = g.num_nodes();
    let mut total = 0u64;
    for u in 0..n {
        for &v in g.neighbors(u) {
            if v > u {
                let pu = arr.position(u) as i64;
                let pv = arr.position(v) as i64;
                total += (pu - pv).unsigned_abs();
            }
        }
    }
    total
}

/// Number of pairs of edges whose position-intervals properly interleave
/// (cross when drawn as arcs above the arrangement line).
#[must_use]
pub fn num_crossings(g: &impl Neighbors, arr: &LinearArrangement) -> u64 {
    let n = g.num_nodes();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for u in 0..n {
        for &v in g.neighbors(u) {
            if v > u {
                let (pu, pv) = (arr.position(u), arr.position(v));
                edges.push((pu.min(pv), pu.max(pv)));
            }
        }
    }

    let mut crossings = 0u64;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let (a, b) = edges[i];
            let (c, d) = edges[j];
            if a == c || a == d || b == c || b == d {
                continue;
            }
            let interleaved = (a < c && c < b && b < d) || (c < a && a < d && d < b);
            if interleaved {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Whether `arr` is a valid permutation of `g`'s vertices.
#[must_use]
pub fn is_permutation(arr: &LinearArrangement) -> bool {
    arr.is_permutation()
}

/// Whether `arr` is a valid arrangement of `g`: a permutation of exactly
/// `g.num_nodes()` vertices.
#[must_use]
pub fn is_arrangement(g: &impl GraphBase, arr: &LinearArrangement) -> bool {
    arr.len() == g.num_nodes() && arr.is_permutation()
}

/// Whether `arr` has zero crossings.
#[must_use]
pub fn is_planar(g: &impl Neighbors, arr: &LinearArrangement) -> bool {
    num_crossings(g, arr) == 0
}

/// Whether the root of `t` is free of any "covering" edge: no edge of
/// the tree, other than one incident to the root itself, has the root's
/// position strictly between its own two endpoints. A covered root is a
/// projectivity violation (some dependency arcs over the root), so this
/// is the cheap necessary condition `is_projective` implies.
#[must_use]
pub fn is_root_covered(t: &RootedTree, arr: &LinearArrangement) -> bool {
    let n = t.num_nodes();
    let root = t.root();
    let root_pos = arr.position(root);
    for u in 0..n {
        if u == root {
            continue;
        }
        for &v in t.out_neighbors(u) {
            if u == root || v == root {
                continue;
            }
            let (pu, pv) = (arr.position(u), arr.position(v));
            let (lo, hi) = (pu.min(pv), pu.max(pv));
            if lo < root_pos && root_pos < hi {
                return true;
            }
        }
    }
    false
}

/// Whether `arr` is projective for `t`: planar, and every subtree occupies
/// a contiguous range of positions (so no edge of the tree crosses from
/// outside a subtree into its interior except through its root).
#[must_use]
pub fn is_projective(t: &RootedTree, arr: &LinearArrangement) -> bool {
    fn interval(t: &RootedTree, u: Node, arr: &LinearArrangement) -> Option<(usize, usize)> {
        let mut lo = arr.position(u);
        let mut hi = lo;
        for &c in t.out_neighbors(u) {
            let (clo, chi) = interval(t, c, arr)?;
            lo = lo.min(clo);
            hi = hi.max(chi);
        }
        let size = 1 + t.out_neighbors(u).iter().map(|&c| subtree_len(t, c)).sum::<usize>();
        if hi - lo + 1 == size {
            Some((lo, hi))
        } else {
            None
        }
    }
    fn subtree_len(t: &RootedTree, u: Node) -> usize {
        1 + t.out_neighbors(u).iter().map(|&c| subtree_len(t, c)).sum::<usize>()
    }

    interval(t, t.root(), arr).is_some()
}

/// Compute a 2-coloring of `g`, if one exists (`g` is bipartite). Always
/// `Some` for trees and forests.
#[must_use]
pub fn bipartite_coloring(g: &impl Neighbors) -> Option<Vec<i8>> {
    let n = g.num_nodes();
    let mut color: Vec<i8> = vec![-1; n];
    for start in 0..n {
        if color[start] != -1 {
            continue;
        }
        color[start] = 0;
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for &v in g.neighbors(u) {
                if color[v] == -1 {
                    color[v] = 1 - color[u];
                    stack.push(v);
                } else if color[v] == color[u] {
                    return None;
                }
            }
        }
    }
    Some(color)
}

/// Whether, reading `color` left to right in `arr`'s position order, the
/// two color classes each occupy a contiguous block (at most one color
/// change across the whole sequence). This is a property of a specific
/// arrangement, not of the graph alone: a graph may be bipartite while a
/// given `π` still interleaves its two classes.
#[must_use]
pub fn is_bipartite(color: &[i8], arr: &LinearArrangement) -> bool {
    let n = arr.len();
    if n == 0 {
        return true;
    }
    let sequence: Vec<i8> = (0..n).map(|p| color[arr.vertex_at(p)]).collect();
    sequence.windows(2).filter(|w| w[0] != w[1]).count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FreeTree;

    #[test]
    fn path_of_five_identity_arrangement_has_edge_length_sum_four() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let arr = LinearArrangement::identity(5);
        assert_eq!(sum_edge_lengths(&t, &arr), 4);
        assert!(is_planar(&t, &arr));
    }

    #[test]
    fn a_single_crossing_pair_is_detected() {
        // Star-ish graph with an explicit crossing: positions 0,1,2,3 and
        // edges (0,2) and (1,3) interleave.
        let mut g = crate::graph::UndirectedGraph::new(4);
        g.add_edge(0, 2, true);
        g.add_edge(1, 3, true);
        let arr = LinearArrangement::identity(4);
        assert_eq!(num_crossings(&g, &arr), 1);
        assert!(!is_planar(&g, &arr));
    }

    #[test]
    fn every_tree_has_a_bipartite_coloring() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (2, 3), (2, 4)]).unwrap();
        assert!(bipartite_coloring(&t).is_some());
    }

    #[test]
    fn identity_arrangement_of_a_path_changes_color_every_step() {
        // 0-1-2-3-4 colored alternately: identity order changes color at
        // every step, which is *not* a single contiguous split.
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let color = bipartite_coloring(&t).unwrap();
        let arr = LinearArrangement::identity(5);
        assert!(!is_bipartite(&color, &arr));
    }

    #[test]
    fn grouping_both_color_classes_together_is_bipartite_by_the_arrangement_definition() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let color = bipartite_coloring(&t).unwrap();
        // color classes for this path are {0,2,4} and {1,3}; arranging all
        // of one class before the other gives at most one color change.
        let arr = LinearArrangement::from_vertex_at(vec![0, 2, 4, 1, 3]);
        assert!(is_bipartite(&color, &arr));
    }

    #[test]
    fn projective_arrangement_of_a_star_rooted_at_centre() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let rt = t.root_at(0);
        let arr = LinearArrangement::identity(5);
        assert!(is_projective(&rt, &arr));
        // every edge in a star touches the root, so no edge can ever
        // span over it.
        assert!(!is_root_covered(&rt, &arr));
    }

    #[test]
    fn an_arc_spanning_over_the_root_is_detected_as_covering_it() {
        // path 1-0-2 rooted at 0, but arranged as 1, 2, 0: the edge (1,2)
        // would have to span over position 2 (the root) -- except 1 and 2
        // are not adjacent in this tree, so use a 4-vertex example: root 0
        // with children 1 and 2, plus a grandchild 3 under 1. Arranging as
        // 1, 0, 3, 2 makes edge (1,3) span over the root's position.
        let t = FreeTree::from_edges(4, &[(0, 1), (0, 2), (1, 3)]).unwrap();
        let rt = t.root_at(0);
        let arr = LinearArrangement::from_vertex_at(vec![1, 0, 3, 2]);
        assert!(is_root_covered(&rt, &arr));
    }
}
