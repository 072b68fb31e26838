//! Dependency flux: for every cut between adjacent positions, the set of
//! edges straddling it, and summary statistics over that set.
//!
//! Grounded on `spec.md` §4.10: "the set of dependencies is the set of
//! edges straddling the cut. Size, left-span, right-span, and *weight* (a
//! maximum independent matching computed via an approximation:
//! iteratively pick a leaf in the dependency graph, count its incident
//! edge, delete all edges incident to its neighbor)."

use std::collections::{HashMap, HashSet};

use crate::graph::Neighbors;
use crate::linarr::arrangement::LinearArrangement;
use crate::Node;

/// The straddling edges at one cut (between positions `cut` and
/// `cut + 1`) and the statistics computed over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyFlux {
    /// The cut sits between position `cut` and position `cut + 1`.
    pub cut: usize,
    /// Every edge `(u, v)` with one endpoint at a position `<= cut` and
    /// the other at a position `> cut`.
    pub dependencies: Vec<(Node, Node)>,
    /// Number of straddling edges.
    pub size: usize,
    /// How far left of the cut the leftmost straddling endpoint reaches.
    pub left_span: usize,
    /// How far right of the cut the rightmost straddling endpoint reaches.
    pub right_span: usize,
    /// Approximate maximum matching size over the straddling edges.
    pub weight: u64,
}

/// Compute the [`DependencyFlux`] at every cut `0..n-1` of `arr`.
#[must_use]
pub fn compute_fluxes(g: &impl Neighbors, arr: &LinearArrangement) -> Vec<DependencyFlux> {
    let n = arr.len();
    let mut edges: Vec<(Node, Node)> = Vec::new();
    for u in 0..n {
        for &v in g.neighbors(u) {
            if v > u {
                edges.push((u, v));
            }
        }
    }

    (0..n.saturating_sub(1)).map(|cut| flux_at(&edges, arr, cut)).collect()
}

fn flux_at(edges: &[(Node, Node)], arr: &LinearArrangement, cut: usize) -> DependencyFlux {
    let mut dependencies = Vec::new();
    let mut min_left_pos = cut;
    let mut max_right_pos = cut + 1;
    for &(u, v) in edges {
        let (pu, pv) = (arr.position(u), arr.position(v));
        let (lo, hi) = (pu.min(pv), pu.max(pv));
        if lo <= cut && hi > cut {
            dependencies.push((u, v));
            min_left_pos = min_left_pos.min(lo);
            max_right_pos = max_right_pos.max(hi);
        }
    }

    let size = dependencies.len();
    let left_span = cut - min_left_pos;
    let right_span = max_right_pos - (cut + 1);
    let weight = approximate_matching_weight(&dependencies);

    DependencyFlux { cut, dependencies, size, left_span, right_span, weight }
}

fn canon(u: Node, v: Node) -> (Node, Node) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Greedily approximate the maximum matching of `edges`: repeatedly pick
/// a degree-1 vertex of the still-active edge set (a vertex with
/// minimum degree if no degree-1 vertex remains), match its one edge, and
/// discard every edge incident to its matched neighbor.
fn approximate_matching_weight(edges: &[(Node, Node)]) -> u64 {
    let mut removed: HashSet<(Node, Node)> = HashSet::new();
    let mut weight = 0u64;

    loop {
        let mut degree: HashMap<Node, usize> = HashMap::new();
        for &(u, v) in edges {
            if removed.contains(&canon(u, v)) {
                continue;
            }
            *degree.entry(u).or_insert(0) += 1;
            *degree.entry(v).or_insert(0) += 1;
        }
        if degree.is_empty() {
            break;
        }

        let pivot = degree
            .iter()
            .find(|&(_, &d)| d == 1)
            .or_else(|| degree.iter().min_by_key(|&(_, &d)| d))
            .map(|(&v, _)| v)
            .expect("degree map is non-empty");

        let Some(&(u, v)) = edges.iter().find(|&&(u, v)| (u == pivot || v == pivot) && !removed.contains(&canon(u, v))) else {
            break;
        };
        let neighbor = if u == pivot { v } else { u };
        weight += 1;
        for &(a, b) in edges {
            if a == neighbor || b == neighbor {
                removed.insert(canon(a, b));
            }
        }
    }

    weight
}
