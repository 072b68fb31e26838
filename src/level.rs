//! Level signatures: per-vertex and per-position level values, and the
//! necessary conditions a maximum-`D` arrangement must satisfy, used by
//! the Branch & Bound solver to prune candidates early without fully
//! expanding them.
//!
//! The level of a vertex `u` at position `p = π(u)` is the number of its
//! neighbors placed to its right minus the number placed to its left.
//! Grounded on the original's `detail/linarr/level_signature.hpp` /
//! `detail/linarr/D/DMax/necessary_conditions.hpp`: a maximum-`D`
//! arrangement's level sequence, read by position left to right, is
//! non-increasing; no two vertices adjacent in the graph share a level;
//! and in certain structural contexts (an antenna, or a bridge) at most
//! one "thistle" (level-0 vertex) may occur.

use crate::graph::Neighbors;
use crate::linarr::arrangement::LinearArrangement;
use crate::topology::{BranchlessPath, PathKind};
use crate::Node;

/// The level of every vertex, indexed by vertex id.
#[must_use]
pub fn levels_per_vertex(g: &impl Neighbors, arr: &LinearArrangement) -> Vec<i64> {
    let n = g.num_nodes();
    (0..n).map(|u| vertex_level(g, arr, u)).collect()
}

/// The level of every position, i.e. `levels_per_vertex` reindexed by
/// `arr.vertex_at(p)`.
#[must_use]
pub fn levels_per_position(g: &impl Neighbors, arr: &LinearArrangement) -> Vec<i64> {
    let by_vertex = levels_per_vertex(g, arr);
    (0..g.num_nodes()).map(|p| by_vertex[arr.vertex_at(p)]).collect()
}

/// The level of a single vertex `u`: its right-neighbors minus its
/// left-neighbors, by position.
#[must_use]
pub fn vertex_level(g: &impl Neighbors, arr: &LinearArrangement, u: Node) -> i64 {
    let pu = arr.position(u) as i64;
    let mut level = 0i64;
    for &v in g.neighbors(u) {
        let pv = arr.position(v) as i64;
        if pv > pu {
            level += 1;
        } else {
            level -= 1;
        }
    }
    level
}

/// A vertex whose level is exactly 0.
#[must_use]
pub fn is_thistle(g: &impl Neighbors, arr: &LinearArrangement, u: Node) -> bool {
    vertex_level(g, arr, u) == 0
}

/// Mirror a per-position level sequence the way mirroring the underlying
/// arrangement would: reversed, with every level negated (a vertex's
/// left/right neighbor counts swap under mirroring).
#[must_use]
pub fn mirror_levels(levels: &[i64]) -> Vec<i64> {
    levels.iter().rev().map(|&l| -l).collect()
}

/// Necessary condition 1: read left to right, the per-position level
/// sequence of a maximum-`D` arrangement never increases.
#[must_use]
pub fn is_level_signature_nonincreasing(levels_per_position: &[i64]) -> bool {
    levels_per_position.windows(2).all(|w| w[0] >= w[1])
}

/// Necessary condition 2: no two vertices joined by an edge may share a
/// level value in a maximum-`D` arrangement.
#[must_use]
pub fn no_two_adjacent_vertices_have_same_level(g: &impl Neighbors, levels_per_vertex: &[i64]) -> bool {
    let n = g.num_nodes();
    for u in 0..n {
        for &v in g.neighbors(u) {
            if v > u && levels_per_vertex[u] == levels_per_vertex[v] {
                return false;
            }
        }
    }
    true
}

/// Necessary condition 3a: within an antenna (a branchless path with a
/// leaf at one end), no internal vertex may be a thistle.
#[must_use]
pub fn no_vertex_in_antenna_is_thistle(g: &impl Neighbors, arr: &LinearArrangement, path: &BranchlessPath) -> bool {
    debug_assert_eq!(path.kind, PathKind::Antenna);
    path.internal.iter().all(|&u| !is_thistle(g, arr, u))
}

/// Necessary condition 3b: within a bridge (a branchless path joining two
/// branching vertices), at most one internal vertex may be a thistle.
#[must_use]
pub fn at_most_one_thistle_in_bridge(g: &impl Neighbors, arr: &LinearArrangement, path: &BranchlessPath) -> bool {
    debug_assert_eq!(path.kind, PathKind::Bridge);
    path.internal.iter().filter(|&&u| is_thistle(g, arr, u)).count() <= 1
}

/// All of the necessary conditions at once, over every branchless path of
/// `t`. A `false` result proves `arr` cannot be a maximum-`D` arrangement;
/// a `true` result is merely consistent with being one.
#[must_use]
pub fn satisfies_necessary_conditions_for_maximum_d(g: &impl Neighbors, arr: &LinearArrangement, paths: &[BranchlessPath]) -> bool {
    let per_vertex = levels_per_vertex(g, arr);
    let per_position = levels_per_position(g, arr);
    if !is_level_signature_nonincreasing(&per_position) {
        return false;
    }
    if !no_two_adjacent_vertices_have_same_level(g, &per_vertex) {
        return false;
    }
    for path in paths {
        let ok = match path.kind {
            PathKind::Antenna => no_vertex_in_antenna_is_thistle(g, arr, path),
            PathKind::Bridge => at_most_one_thistle_in_bridge(g, arr, path),
        };
        if !ok {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FreeTree;

    #[test]
    fn levels_of_a_path_in_identity_order() {
        // 0 - 1 - 2 - 3 - 4, identity arrangement.
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let arr = LinearArrangement::identity(5);
        let levels = levels_per_vertex(&t, &arr);
        // endpoints have one neighbor to the right/left only.
        assert_eq!(levels[0], 1);
        assert_eq!(levels[4], -1);
        // internal vertices have one neighbor each side: levels cancel.
        assert_eq!(levels[1], 0);
        assert_eq!(levels[2], 0);
        assert_eq!(levels[3], 0);
    }

    #[test]
    fn mirroring_levels_reverses_and_negates() {
        let levels = vec![2, 0, -1, -1];
        let mirrored = mirror_levels(&levels);
        assert_eq!(mirrored, vec![1, 1, 0, -2]);
        assert_eq!(mirror_levels(&mirrored), levels);
    }

    #[test]
    fn nonincreasing_check_rejects_an_increase() {
        assert!(is_level_signature_nonincreasing(&[2, 1, 1, 0]));
        assert!(!is_level_signature_nonincreasing(&[1, 2, 0]));
    }

    #[test]
    fn no_two_adjacent_same_level_on_a_path() {
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let arr = LinearArrangement::identity(5);
        let levels = levels_per_vertex(&t, &arr);
        // vertices 1, 2, 3 all have level 0 and 1-2, 2-3 are edges: this
        // identity arrangement of a path violates the condition.
        assert!(!no_two_adjacent_vertices_have_same_level(&t, &levels));
    }
}
