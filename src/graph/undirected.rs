use log::debug;

use super::{assert_valid_edge, GraphBase, Neighbors};
use crate::sorting::counting_sort_nodes;
use crate::Node;

/// An undirected graph on a fixed vertex set `{0, .., n-1}`.
///
/// Stored as one adjacency list per vertex. A graph is *normalized* when
/// every adjacency list is sorted in ascending order; this is tracked by
/// [`UndirectedGraph::is_normalized`] rather than enforced eagerly, so
/// that a batch of insertions can defer sorting to a single
/// [`UndirectedGraph::normalize`] call.
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<Node>>,
    num_edges: usize,
    normalized: bool,
}

impl UndirectedGraph {
    /// Construct an edgeless graph on `n` vertices.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            num_edges: 0,
            normalized: true,
        }
    }

    /// Number of edges currently in the graph.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Whether every adjacency list is currently sorted ascending.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Insert the edge `{u, v}`.
    ///
    /// # Panics (debug builds only)
    /// If `u == v`, either vertex is out of range, or the edge already
    /// exists: these are programming errors, not recoverable conditions
    /// (`spec.md` §7).
    pub fn add_edge(&mut self, u: Node, v: Node, normalize: bool) {
        assert_valid_edge(self.adjacency.len(), u, v);
        debug_assert!(!self.has_edge(u, v), "duplicate edge ({u}, {v})");

        push_sorted_tail(&mut self.adjacency[u], v, &mut self.normalized, normalize);
        push_sorted_tail(&mut self.adjacency[v], u, &mut self.normalized, normalize);
        self.num_edges += 1;
    }

    /// Insert every edge in `edges`.
    pub fn add_edges(&mut self, edges: &[(Node, Node)], normalize: bool) {
        for &(u, v) in edges {
            self.add_edge(u, v, normalize);
        }
    }

    /// Remove the edge `{u, v}` if present.
    pub fn remove_edge(&mut self, u: Node, v: Node, normalize: bool) {
        if remove_value(&mut self.adjacency[u], v) {
            remove_value(&mut self.adjacency[v], u);
            self.num_edges -= 1;
            if normalize {
                self.normalize();
            } else {
                // swap-remove preserves relative order of the untouched
                // prefix but not of the tail, so we can no longer claim
                // the invariant holds.
                self.normalized = false;
            }
        }
    }

    /// Remove every edge in `edges` that is present.
    pub fn remove_edges(&mut self, edges: &[(Node, Node)], normalize: bool) {
        for &(u, v) in edges {
            self.remove_edge(u, v, normalize);
        }
    }

    /// Remove every edge incident to `u`.
    pub fn remove_edges_incident_to(&mut self, u: Node) {
        let neighbors = std::mem::take(&mut self.adjacency[u]);
        self.num_edges -= neighbors.len();
        for v in neighbors {
            remove_value(&mut self.adjacency[v], u);
        }
    }

    /// Remove every edge, keeping the vertex count.
    pub fn clear(&mut self) {
        for adj in &mut self.adjacency {
            adj.clear();
        }
        self.num_edges = 0;
        self.normalized = true;
    }

    /// Whether `{u, v}` is an edge of this graph.
    #[must_use]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency[u].contains(&v)
    }

    /// Sort every adjacency list ascending, restoring the normalization
    /// invariant. Idempotent: `normalize(); normalize();` leaves the graph
    /// exactly as the first call did (`spec.md` §8).
    pub fn normalize(&mut self) {
        if self.normalized {
            return;
        }
        debug!("re-normalizing undirected graph of {} vertices", self.adjacency.len());
        let n = self.adjacency.len();
        for adj in &mut self.adjacency {
            counting_sort_nodes(adj, n);
        }
        self.normalized = true;
    }

    /// Combine `self` and `other` into a single graph on
    /// `self.num_nodes() + other.num_nodes()` vertices: `other`'s vertex
    /// indices are shifted up by `self.num_nodes()`, and the two vertex
    /// sets are otherwise disconnected.
    #[must_use]
    pub fn disjoint_union(&self, other: &Self) -> Self {
        let n1 = self.num_nodes();
        let mut adjacency = self.adjacency.clone();
        adjacency.extend(other.adjacency.iter().map(|adj| adj.iter().map(|&v| v + n1).collect()));
        Self {
            adjacency,
            num_edges: self.num_edges + other.num_edges,
            normalized: self.normalized && other.normalized,
        }
    }
}

impl GraphBase for UndirectedGraph {
    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        false
    }
}

impl Neighbors for UndirectedGraph {
    fn neighbors(&self, u: Node) -> &[Node] {
        &self.adjacency[u]
    }
}

/// Push `v` onto `list`; if `normalize` was requested, keep `list` sorted
/// by insertion-sort. Otherwise conservatively update `*flag`: the push
/// preserves a sorted list iff `v` is `>=` the previous tail.
pub(crate) fn push_sorted_tail(list: &mut Vec<Node>, v: Node, flag: &mut bool, normalize: bool) {
    if normalize {
        let pos = list.partition_point(|&x| x < v);
        list.insert(pos, v);
    } else {
        if *flag {
            if let Some(&last) = list.last() {
                *flag = v > last;
            }
        }
        list.push(v);
    }
}

/// Swap-remove the first occurrence of `v` from `list`. Returns whether it
/// was found.
pub(crate) fn remove_value(list: &mut Vec<Node>, v: Node) -> bool {
    if let Some(pos) = list.iter().position(|&x| x == v) {
        list.swap_remove(pos);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent_and_sorts_ascending() {
        let mut g = UndirectedGraph::new(4);
        g.add_edge(2, 1, false);
        g.add_edge(0, 1, false);
        g.add_edge(3, 1, false);
        assert!(!g.is_normalized());

        g.normalize();
        assert!(g.is_normalized());
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0, 2, 3]);
        assert_eq!(g.neighbors(2), &[1]);
        assert_eq!(g.neighbors(3), &[1]);

        let before = g.clone();
        g.normalize();
        assert_eq!(before.neighbors(1), g.neighbors(1));
    }

    #[test]
    fn add_edge_with_normalize_keeps_flag_true() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(2, 0, true);
        g.add_edge(1, 0, true);
        assert!(g.is_normalized());
        assert_eq!(g.neighbors(0), &[1, 2]);
    }

    #[test]
    fn disjoint_union_shifts_indices() {
        let mut a = UndirectedGraph::new(2);
        a.add_edge(0, 1, true);
        let mut b = UndirectedGraph::new(2);
        b.add_edge(0, 1, true);

        let u = a.disjoint_union(&b);
        assert_eq!(u.num_nodes(), 4);
        assert_eq!(u.num_edges(), 2);
        assert!(u.has_edge(0, 1));
        assert!(u.has_edge(2, 3));
        assert!(!u.has_edge(1, 2));
    }
}
