//! Tree isomorphism testing: the AHU (Aho-Hopcroft-Ullman) canonical-form
//! algorithm, plus a cheap necessary-condition sieve to reject obvious
//! non-isomorphic pairs before paying for a full comparison.
//!
//! Grounded on the original's `detail/isomorphism/tree_isomorphism.hpp`:
//! two rooted trees are isomorphic iff their AHU canonical strings match,
//! computed bottom-up by recursively sorting each vertex's children's
//! canonical strings. Two free trees are isomorphic iff some choice of
//! centre-rootings of each yields isomorphic rooted trees (a tree has one
//! centre, or two adjacent ones -- at most two candidate rootings per
//! side).

use crate::topology::tree_centre;
use crate::tree::{FreeTree, RootedTree};
use crate::Node;

/// A cheap, fast-to-compute fingerprint of a free tree's shape: vertex
/// count and sorted degree sequence. Two non-isomorphic trees may share a
/// fingerprint, but two isomorphic trees always do -- so a mismatch here
/// proves non-isomorphism without paying for the full AHU comparison.
#[must_use]
pub fn fast_non_isomorphism_sieve(a: &FreeTree, b: &FreeTree) -> bool {
    if a.num_nodes() != b.num_nodes() {
        return true;
    }
    let mut da: Vec<usize> = (0..a.num_nodes()).map(|u| a.degree(u)).collect();
    let mut db: Vec<usize> = (0..b.num_nodes()).map(|u| b.degree(u)).collect();
    da.sort_unstable();
    db.sort_unstable();
    da != db
}

/// The AHU canonical string of `u`'s subtree within `rt`: children's
/// canonical strings, sorted, wrapped in a pair of delimiters.
fn ahu_string(rt: &RootedTree, u: Node) -> String {
    let mut child_strings: Vec<String> = rt.out_neighbors(u).iter().map(|&c| ahu_string(rt, c)).collect();
    child_strings.sort_unstable();
    let mut s = String::from("(");
    for cs in child_strings {
        s.push_str(&cs);
    }
    s.push(')');
    s
}

/// The AHU canonical string of a whole rooted tree (its root's subtree
/// string).
#[must_use]
pub fn ahu_canonical_string(rt: &RootedTree) -> String {
    ahu_string(rt, rt.root())
}

/// A canonical-form tuple representation equivalent to the string form,
/// built the same way but as nested vectors rather than characters --
/// convenient when callers want to avoid allocating/parsing text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum AhuTuple {
    /// A leaf (no children).
    Leaf,
    /// An internal vertex, its children's canonical tuples sorted.
    Node(Vec<AhuTuple>),
}

fn ahu_tuple(rt: &RootedTree, u: Node) -> AhuTuple {
    let mut children: Vec<AhuTuple> = rt.out_neighbors(u).iter().map(|&c| ahu_tuple(rt, c)).collect();
    children.sort_unstable();
    if children.is_empty() {
        AhuTuple::Leaf
    } else {
        AhuTuple::Node(children)
    }
}

/// The AHU canonical tuple of a whole rooted tree.
#[must_use]
pub fn ahu_canonical_tuple(rt: &RootedTree) -> AhuTuple {
    ahu_tuple(rt, rt.root())
}

/// Whether two rooted trees are isomorphic (as rooted trees: the roots
/// must correspond to each other).
#[must_use]
pub fn rooted_trees_are_isomorphic(a: &RootedTree, b: &RootedTree) -> bool {
    if a.num_nodes() != b.num_nodes() {
        return false;
    }
    ahu_canonical_tuple(a) == ahu_canonical_tuple(b)
}

/// Whether two free trees are isomorphic: true iff some pairing of their
/// centre-rootings (each tree has one centre, or two adjacent candidate
/// centres) gives isomorphic rooted trees.
#[must_use]
pub fn free_trees_are_isomorphic(a: &FreeTree, b: &FreeTree) -> bool {
    if fast_non_isomorphism_sieve(a, b) {
        return false;
    }
    if a.num_nodes() == 0 {
        return true;
    }

    let (ac1, ac2) = tree_centre(a);
    let (bc1, bc2) = tree_centre(b);

    let a_roots = [Some(ac1), ac2];
    let b_roots = [Some(bc1), bc2];

    for &ar in a_roots.iter().flatten() {
        let rt_a = a.root_at(ar);
        for &br in b_roots.iter().flatten() {
            let rt_b = b.root_at(br);
            if rooted_trees_are_isomorphic(&rt_a, &rt_b) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_isomorphic_stars_match() {
        let a = FreeTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let b = FreeTree::from_edges(4, &[(2, 0), (2, 1), (2, 3)]).unwrap();
        assert!(free_trees_are_isomorphic(&a, &b));
    }

    #[test]
    fn a_star_and_a_path_are_not_isomorphic() {
        let star = FreeTree::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let path = FreeTree::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(fast_non_isomorphism_sieve(&star, &path));
        assert!(!free_trees_are_isomorphic(&star, &path));
    }

    #[test]
    fn sieve_does_not_reject_two_distinct_but_same_degree_sequence_trees() {
        // both are "spiders" with legs of different lengths but identical
        // degree multisets {1,1,1,2,3}: the sieve must not claim
        // non-isomorphism here (it is only a one-directional filter).
        let a = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
        let b = FreeTree::from_edges(5, &[(0, 1), (0, 2), (0, 3), (1, 4)]).unwrap();
        assert!(!fast_non_isomorphism_sieve(&a, &b));
        assert!(free_trees_are_isomorphic(&a, &b));
    }

    #[test]
    fn rooted_comparison_respects_the_root_choice() {
        // a path 0-1-2 rooted at an endpoint is not isomorphic, as a
        // *rooted* tree, to the same path rooted at its middle vertex.
        let t = FreeTree::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let rooted_at_end = t.root_at(0);
        let rooted_at_middle = t.root_at(1);
        assert!(!rooted_trees_are_isomorphic(&rooted_at_end, &rooted_at_middle));
    }
}
