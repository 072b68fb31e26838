use crate::graph::{GraphBase, Neighbors, TreeConstructionError, UndirectedGraph};
use crate::tree::RootedTree;
use crate::visit::{Order, Traversal};
use crate::Node;

/// A free (unrooted) tree: an acyclic [`UndirectedGraph`].
///
/// Built incrementally with [`FreeTree::new`] + [`FreeTree::add_edge`] (each
/// insertion is checked, in debug builds, not to close a cycle), or in one
/// shot from a full edge list with [`FreeTree::from_edges`]. May be a
/// forest while under construction; [`FreeTree::is_tree`] reports whether
/// it is currently a single connected acyclic component.
#[derive(Debug, Clone)]
pub struct FreeTree {
    graph: UndirectedGraph,
    union_find: UnionFind,
}

impl FreeTree {
    /// An edgeless forest of `n` isolated vertices.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { graph: UndirectedGraph::new(n), union_find: UnionFind::new(n) }
    }

    /// Build a tree from a complete edge list.
    ///
    /// # Errors
    /// [`TreeConstructionError::WrongEdgeCount`] if `edges.len() != n - 1`;
    /// [`TreeConstructionError::NotAcyclic`] if the edges do not form a
    /// single connected acyclic component.
    pub fn from_edges(n: usize, edges: &[(Node, Node)]) -> Result<Self, TreeConstructionError> {
        if edges.len() != n.saturating_sub(1) {
            return Err(TreeConstructionError::WrongEdgeCount { num_nodes: n, num_edges: edges.len() });
        }
        let mut t = Self::new(n);
        for &(u, v) in edges {
            if !t.try_add_edge(u, v) {
                return Err(TreeConstructionError::NotAcyclic);
            }
        }
        Ok(t)
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Number of edges inserted so far.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Whether this is currently a single connected, acyclic component
    /// spanning all vertices (as opposed to a forest of several trees).
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.num_nodes() > 0 && self.num_edges() == self.num_nodes() - 1
    }

    /// Degree of `u`.
    #[must_use]
    pub fn degree(&self, u: Node) -> usize {
        self.graph.degree(u)
    }

    /// Neighbors of `u`.
    #[must_use]
    pub fn neighbors(&self, u: Node) -> &[Node] {
        self.graph.neighbors(u)
    }

    /// Whether `{u, v}` is an edge.
    #[must_use]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Insert the edge `{u, v}`.
    ///
    /// # Panics (debug builds only)
    /// If the edge would close a cycle: inserting an edge between two
    /// vertices already connected is a programming error for a type whose
    /// whole contract is acyclicity.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        let ok = self.try_add_edge(u, v);
        debug_assert!(ok, "edge ({u}, {v}) would close a cycle in a free tree");
    }

    /// Like [`Self::add_edge`], but reports failure instead of asserting.
    /// Used by [`Self::from_edges`] to turn a cycle into a `Result` rather
    /// than a panic, since there the cycle comes from untrusted input.
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.union_find.find(u) == self.union_find.find(v) {
            return false;
        }
        self.graph.add_edge(u, v, true);
        self.union_find.union(u, v);
        true
    }

    /// Size of the connected component containing `x`.
    #[must_use]
    pub fn num_nodes_component(&self, x: Node) -> usize {
        let root = self.union_find.find(x);
        (0..self.num_nodes()).filter(|&u| self.union_find.find(u) == root).count()
    }

    /// Orient this tree away from `r`, producing a [`RootedTree`] whose
    /// out-edges are parent-to-child. Used by the projective/planar Dmin
    /// engine and by the Branch & Bound solver's launcher, both of which
    /// need a rooted view of an otherwise-free tree (`spec.md` §4.5, §4.8).
    #[must_use]
    pub fn root_at(&self, r: Node) -> RootedTree {
        let n = self.num_nodes();
        let mut rt = RootedTree::new(n, r);

        let graph = self.graph.clone();
        let mut traversal = Traversal::new(n, Order::Bfs, true, move |u| graph.neighbors(u).to_vec());
        let parent_edges = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let parent_edges_cb = parent_edges.clone();
        traversal.set_process_neighbor(move |from, to, _is_direct| {
            parent_edges_cb.borrow_mut().push((from, to));
        });
        traversal.start_at(r);

        for (parent, child) in parent_edges.borrow().iter().copied() {
            rt.add_edge(parent, child);
        }
        rt
    }
}

impl GraphBase for FreeTree {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn is_directed(&self) -> bool {
        false
    }
}

impl Neighbors for FreeTree {
    fn neighbors(&self, u: Node) -> &[Node] {
        self.graph.neighbors(u)
    }
}

/// A minimal disjoint-set structure used only to validate, in O(α(n))
/// amortized per edge, that [`FreeTree`] insertions never close a cycle.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    fn find(&mut self, u: Node) -> Node {
        if self.parent[u] != u {
            self.parent[u] = self.find(self.parent[u]);
        }
        self.parent[u]
    }

    fn union(&mut self, u: Node, v: Node) {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return;
        }
        match self.rank[ru].cmp(&self.rank[rv]) {
            std::cmp::Ordering::Less => self.parent[ru] = rv,
            std::cmp::Ordering::Greater => self.parent[rv] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv] = ru;
                self.rank[ru] += 1;
            }
        }
    }
}
