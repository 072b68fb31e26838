use crate::graph::{DirectedGraph, DirectedNeighbors, GraphBase, TreeConstructionError};
use crate::Node;

/// A rooted tree: a [`DirectedGraph`] whose edges point from parent to
/// child, together with a distinguished root.
///
/// Carries an optional, explicitly invalidatable cache of per-vertex
/// subtree sizes (`spec.md` §3: "a tree with a distinguished root and,
/// optionally, cached subtree sizes per vertex (valid/invalid flag)"),
/// filled in by [`crate::topology::compute_subtree_sizes`].
#[derive(Debug, Clone)]
pub struct RootedTree {
    graph: DirectedGraph,
    root: Node,
    subtree_sizes: Vec<u64>,
    subtree_sizes_valid: bool,
}

impl RootedTree {
    /// An edgeless rooted tree of `n` vertices, rooted at `root`.
    #[must_use]
    pub fn new(n: usize, root: Node) -> Self {
        debug_assert!(root < n, "root {root} out of range for {n} vertices");
        Self {
            graph: DirectedGraph::new(n),
            root,
            subtree_sizes: Vec::new(),
            subtree_sizes_valid: false,
        }
    }

    /// Build a rooted tree from a head vector: `head[i]` is the 1-indexed
    /// parent of vertex `i`, or `0` to mark `i` as the root.
    ///
    /// # Errors
    /// [`TreeConstructionError::MultipleRoots`] if more than one entry is
    /// `0`; [`TreeConstructionError::NoRoot`] if none is.
    pub fn from_head_vector(head: &[i64]) -> Result<Self, TreeConstructionError> {
        let n = head.len();
        let mut root = None;
        for (i, &h) in head.iter().enumerate() {
            if h == 0 {
                if root.is_some() {
                    return Err(TreeConstructionError::MultipleRoots);
                }
                root = Some(i);
            }
        }
        let Some(root) = root else { return Err(TreeConstructionError::NoRoot) };

        let mut t = Self::new(n, root);
        for (i, &h) in head.iter().enumerate() {
            if h != 0 {
                let parent = (h - 1) as usize;
                t.add_edge(parent, i);
            }
        }
        Ok(t)
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// The distinguished root.
    #[must_use]
    pub fn root(&self) -> Node {
        self.root
    }

    /// Degree (out + in) of `u` in the underlying undirected shape.
    #[must_use]
    pub fn degree(&self, u: Node) -> usize {
        self.graph.out_degree(u) + self.graph.in_degree(u)
    }

    /// Children of `u`.
    #[must_use]
    pub fn out_neighbors(&self, u: Node) -> &[Node] {
        self.graph.out_neighbors(u)
    }

    /// Parent of `u` (empty unless `u` has been given a parent edge).
    #[must_use]
    pub fn in_neighbors(&self, u: Node) -> &[Node] {
        self.graph.in_neighbors(u)
    }

    /// Parent of `u`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.graph.in_neighbors(u).first().copied()
    }

    /// Insert the parent-to-child edge `parent -> child`. Invalidates any
    /// cached subtree sizes.
    pub fn add_edge(&mut self, parent: Node, child: Node) {
        self.graph.add_edge(parent, child, true);
        self.subtree_sizes_valid = false;
    }

    /// Whether [`Self::subtree_size`] currently holds a valid value for
    /// every vertex.
    #[must_use]
    pub fn subtree_sizes_valid(&self) -> bool {
        self.subtree_sizes_valid
    }

    /// Mark the subtree-size cache invalid, forcing the next
    /// [`crate::topology::compute_subtree_sizes`] call to recompute.
    pub fn invalidate_subtree_sizes(&mut self) {
        self.subtree_sizes_valid = false;
    }

    /// Install a freshly-computed subtree-size table (called by
    /// [`crate::topology::compute_subtree_sizes`]).
    pub(crate) fn set_subtree_sizes(&mut self, sizes: Vec<u64>) {
        debug_assert_eq!(sizes.len(), self.num_nodes());
        self.subtree_sizes = sizes;
        self.subtree_sizes_valid = true;
    }

    /// Size of the subtree rooted at `u`.
    ///
    /// # Panics (debug builds only)
    /// If the cache is not valid; callers must run
    /// [`crate::topology::compute_subtree_sizes`] first.
    #[must_use]
    pub fn subtree_size(&self, u: Node) -> u64 {
        debug_assert!(self.subtree_sizes_valid, "subtree sizes were never computed");
        self.subtree_sizes[u]
    }
}

impl GraphBase for RootedTree {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl DirectedNeighbors for RootedTree {
    fn out_neighbors(&self, u: Node) -> &[Node] {
        self.graph.out_neighbors(u)
    }

    fn in_neighbors(&self, u: Node) -> &[Node] {
        self.graph.in_neighbors(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_head_vector_builds_parent_child_edges() {
        // vertex 0 is the root; 1's parent is 0 (1-indexed: head[1] = 1);
        // 2's parent is 0.
        let rt = RootedTree::from_head_vector(&[0, 1, 1]).unwrap();
        assert_eq!(rt.root(), 0);
        assert_eq!(rt.parent(1), Some(0));
        assert_eq!(rt.parent(2), Some(0));
        assert_eq!(rt.parent(0), None);
    }

    #[test]
    fn multiple_roots_is_rejected() {
        assert_eq!(RootedTree::from_head_vector(&[0, 0]).unwrap_err(), TreeConstructionError::MultipleRoots);
    }

    #[test]
    fn no_root_is_rejected() {
        assert_eq!(RootedTree::from_head_vector(&[1, 1]).unwrap_err(), TreeConstructionError::NoRoot);
    }
}
