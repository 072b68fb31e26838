//! Tree topology utilities: centre, centroid, subtree sizes, branchless
//! path decomposition, and coarse tree-type classification.
//!
//! Grounded on the original's `detail/properties/tree_centre.hpp` (centre,
//! iterative leaf-peeling), `detail/graphs/size_subtrees.hpp` (recursive
//! post-order subtree sizes) and `detail/graphs/tree_classification.hpp`
//! (degree-histogram based classification).

use std::collections::VecDeque;

use crate::tree::{FreeTree, RootedTree};
use crate::Node;

/// The one or two central vertices of a free tree: the last vertex or
/// vertex pair left standing after iteratively peeling away all current
/// leaves.
///
/// # Panics
/// If `t.num_nodes() == 0`: an empty tree has no vertex to return.
#[must_use]
pub fn tree_centre(t: &FreeTree) -> (Node, Option<Node>) {
    let n = t.num_nodes();
    assert!(n > 0, "cannot compute the centre of an empty tree");
    if n == 1 {
        return (0, None);
    }
    if n == 2 {
        return (0, Some(1));
    }

    let mut degree: Vec<usize> = (0..n).map(|u| t.degree(u)).collect();
    let mut remaining = n;
    let mut leaves: Vec<Node> = (0..n).filter(|&u| degree[u] == 1).collect();

    while remaining > 2 {
        remaining -= leaves.len();
        let mut next = Vec::new();
        for &leaf in &leaves {
            for &nb in t.neighbors(leaf) {
                if degree[nb] > 1 {
                    degree[nb] -= 1;
                    if degree[nb] == 1 {
                        next.push(nb);
                    }
                }
            }
        }
        leaves = next;
    }

    if leaves.len() == 1 {
        (leaves[0], None)
    } else {
        (leaves[0], Some(leaves[1]))
    }
}

/// Fill in `rt`'s subtree-size cache with a recursive post-order pass.
pub fn compute_subtree_sizes(rt: &mut RootedTree) {
    let n = rt.num_nodes();
    let mut sizes = vec![0u64; n];

    fn visit(rt: &RootedTree, u: Node, sizes: &mut [u64]) -> u64 {
        let mut size = 1u64;
        for &c in rt.out_neighbors(u) {
            size += visit(rt, c, sizes);
        }
        sizes[u] = size;
        size
    }

    if n > 0 {
        visit(rt, rt.root(), &mut sizes);
    }
    rt.set_subtree_sizes(sizes);
}

/// The one or two centroid vertices: those minimizing the size of the
/// largest component left after their removal.
#[must_use]
pub fn centroid(t: &FreeTree) -> (Node, Option<Node>) {
    let n = t.num_nodes();
    if n == 1 {
        return (0, None);
    }

    let mut rt = t.root_at(0);
    compute_subtree_sizes(&mut rt);

    let weight = |v: Node| -> u64 {
        let mut w = n as u64 - rt.subtree_size(v);
        for &c in rt.out_neighbors(v) {
            w = w.max(rt.subtree_size(c));
        }
        w
    };

    let mut best = 0;
    let mut best_w = weight(0);
    for v in 1..n {
        let w = weight(v);
        if w < best_w {
            best_w = w;
            best = v;
        }
    }

    let second = t.neighbors(best).iter().copied().find(|&v| weight(v) == best_w);
    (best, second)
}

/// Whether a [`BranchlessPath`] terminates in a leaf on at least one side
/// (an "antenna") or connects two branching vertices ("bridge").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// One endpoint is a degree-1 vertex.
    Antenna,
    /// Both endpoints have degree >= 3.
    Bridge,
}

/// A maximal path of degree-2 vertices between two vertices whose degree
/// is not 2 (a "hub": either a leaf or a branching vertex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchlessPath {
    /// One endpoint hub.
    pub first: Node,
    /// The other endpoint hub.
    pub second: Node,
    /// The degree-2 vertices strictly between `first` and `second`, in
    /// path order.
    pub internal: Vec<Node>,
    /// Antenna or bridge.
    pub kind: PathKind,
}

/// Decompose `t` into its maximal branchless paths. Every edge of the
/// tree belongs to exactly one such path.
#[must_use]
pub fn branchless_paths(t: &FreeTree) -> Vec<BranchlessPath> {
    let n = t.num_nodes();
    let mut result = Vec::new();
    if n < 2 {
        return result;
    }

    let hubs: Vec<Node> = (0..n).filter(|&u| t.degree(u) != 2).collect();
    for &h in &hubs {
        for &nb in t.neighbors(h) {
            let mut prev = h;
            let mut cur = nb;
            let mut internal = Vec::new();
            while t.degree(cur) == 2 {
                internal.push(cur);
                let next = t.neighbors(cur).iter().copied().find(|&x| x != prev).expect("degree-2 vertex has two distinct neighbors");
                prev = cur;
                cur = next;
            }
            if h < cur {
                let kind = if t.degree(h) == 1 || t.degree(cur) == 1 { PathKind::Antenna } else { PathKind::Bridge };
                result.push(BranchlessPath { first: h, second: cur, internal, kind });
            }
        }
    }
    result
}

/// A coarse structural classification of a free tree's shape, mirroring
/// the original's degree-histogram based `tree_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeType {
    /// No vertices.
    Empty,
    /// A single, isolated vertex.
    Singleton,
    /// Exactly two vertices joined by one edge.
    TwoLinear,
    /// A path: every vertex has degree <= 2.
    Linear,
    /// One vertex adjacent to every other (all of which are leaves).
    Star,
    /// Two adjacent non-leaf vertices, every other vertex a leaf attached
    /// to one of the two.
    Bistar,
    /// Exactly one vertex of degree >= 3, one ray of length 2, the rest
    /// leaves.
    Quasistar,
    /// Exactly one vertex of degree >= 3, every other vertex degree <= 2
    /// (a union of paths meeting at one hub).
    Spider,
    /// Removing all leaves leaves a path.
    Caterpillar,
    /// None of the above.
    Unknown,
}

/// Classify the shape of `t`.
#[must_use]
pub fn classify_tree(t: &FreeTree) -> TreeType {
    let n = t.num_nodes();
    match n {
        0 => return TreeType::Empty,
        1 => return TreeType::Singleton,
        2 => return TreeType::TwoLinear,
        _ => {}
    }

    let degrees: Vec<usize> = (0..n).map(|u| t.degree(u)).collect();
    let n_deg_ge_3 = degrees.iter().filter(|&&d| d >= 3).count();
    let n_deg_eq_1 = degrees.iter().filter(|&&d| d == 1).count();
    let n_deg_eq_2 = degrees.iter().filter(|&&d| d == 2).count();

    if n_deg_ge_3 == 0 {
        return TreeType::Linear;
    }

    if n_deg_ge_3 == 1 {
        let hub = degrees.iter().position(|&d| d >= 3).unwrap();
        if degrees[hub] == n - 1 {
            return TreeType::Star;
        }
        if n_deg_eq_2 == 1 && degrees[hub] == n - 2 {
            return TreeType::Quasistar;
        }
        return TreeType::Spider;
    }

    if n_deg_ge_3 == 2 {
        let hubs: Vec<Node> = (0..n).filter(|&u| degrees[u] >= 3).collect();
        if t.has_edge(hubs[0], hubs[1]) && n_deg_eq_1 == n - 2 {
            return TreeType::Bistar;
        }
    }

    if is_caterpillar(t, &degrees) {
        return TreeType::Caterpillar;
    }

    TreeType::Unknown
}

/// A tree is a caterpillar iff removing every leaf leaves a path (a set
/// of vertices each with at most two non-leaf neighbors).
fn is_caterpillar(t: &FreeTree, degrees: &[usize]) -> bool {
    let n = t.num_nodes();
    let internal: Vec<Node> = (0..n).filter(|&u| degrees[u] > 1).collect();
    if internal.is_empty() {
        return true;
    }
    internal.iter().all(|&u| t.neighbors(u).iter().filter(|&&v| degrees[v] > 1).count() <= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_a_path_of_five_is_the_middle_vertex() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(tree_centre(&t), (2, None));
    }

    #[test]
    fn centre_of_a_path_of_four_is_the_middle_edge() {
        let t = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let (a, b) = tree_centre(&t);
        let mut pair = vec![a, b.unwrap()];
        pair.sort_unstable();
        assert_eq!(pair, vec![1, 2]);
    }

    #[test]
    fn subtree_sizes_of_a_star_rooted_at_its_centre() {
        let t = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let mut rt = t.root_at(0);
        compute_subtree_sizes(&mut rt);
        assert_eq!(rt.subtree_size(0), 5);
        assert_eq!(rt.subtree_size(1), 1);
    }

    #[test]
    fn classify_path_star_and_bistar() {
        let path = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(classify_tree(&path), TreeType::Linear);

        let star = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        assert_eq!(classify_tree(&star), TreeType::Star);

        // two adjacent hubs (0, 1), each with two extra leaves.
        let bistar = FreeTree::from_edges(6, &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5)]).unwrap();
        assert_eq!(classify_tree(&bistar), TreeType::Bistar);
    }

    #[test]
    fn branchless_paths_of_a_spider() {
        // centre 0 with three legs of length 2.
        let spider = FreeTree::from_edges(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]).unwrap();
        let paths = branchless_paths(&spider);
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.kind == PathKind::Antenna));
        assert!(paths.iter().all(|p| p.internal.len() == 1));
    }
}
