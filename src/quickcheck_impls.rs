//! `quickcheck::Arbitrary` impls for small free trees and arrangements,
//! gated behind the `quickcheck` feature. Grounded on petgraph's own
//! `src/quickcheck.rs`: build up an `Arbitrary` value by repeatedly
//! exercising the type's own constructors rather than poking at private
//! fields.

use quickcheck::{Arbitrary, Gen};

use crate::linarr::arrangement::LinearArrangement;
use crate::tree::FreeTree;

/// A free tree on a small number of vertices, generated by attaching each
/// new vertex to a uniformly chosen existing one (the standard way to
/// guarantee the result is always a tree, never a forest).
impl Arbitrary for FreeTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let choices: Vec<usize> = (1..=8).collect();
        let n = *g.choose(&choices).unwrap_or(&1);
        let mut t = FreeTree::new(n);
        for child in 1..n {
            let choices: Vec<usize> = (0..child).collect();
            let parent = *g.choose(&choices).expect("child >= 1 has a nonempty parent range");
            t.add_edge(parent, child);
        }
        t
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let n = self.num_nodes();
        if n <= 1 {
            return Box::new(std::iter::empty());
        }
        // Shrink by dropping the highest-numbered leaf, one at a time: the
        // result is always still a tree since leaves carry no subtree.
        let leaf = (0..n).rev().find(|&u| self.degree(u) == 1);
        match leaf {
            Some(leaf) => {
                let edges: Vec<(usize, usize)> =
                    (0..n).filter(|&u| u != leaf).flat_map(|u| self.neighbors(u).iter().filter(move |&&v| v != leaf && v > u).map(move |&v| (u, v))).collect();
                let remap: Vec<usize> = {
                    let mut next = 0usize;
                    (0..n)
                        .map(|u| {
                            if u == leaf {
                                usize::MAX
                            } else {
                                let r = next;
                                next += 1;
                                r
                            }
                        })
                        .collect()
                };
                let remapped_edges: Vec<(usize, usize)> = edges.iter().map(|&(u, v)| (remap[u], remap[v])).collect();
                let shrunk = FreeTree::from_edges(n - 1, &remapped_edges).ok();
                Box::new(shrunk.into_iter())
            }
            None => Box::new(std::iter::empty()),
        }
    }
}

/// A uniformly random permutation of `0..n` for some small `n`, generated
/// by shuffling the identity via repeated random swaps.
impl Arbitrary for LinearArrangement {
    fn arbitrary(g: &mut Gen) -> Self {
        let choices: Vec<usize> = (0..=8).collect();
        let n = *g.choose(&choices).unwrap_or(&0);
        let mut vertex_at: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let choices: Vec<usize> = (0..=i).collect();
            let j = *g.choose(&choices).expect("0..=i is nonempty");
            vertex_at.swap(i, j);
        }
        LinearArrangement::from_vertex_at(vertex_at)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let n = self.len();
        if n <= 1 {
            return Box::new(std::iter::empty());
        }
        let filtered: Vec<usize> = (0..n).map(|p| self.vertex_at(p)).filter(|&v| v != n - 1).collect();
        let smaller = LinearArrangement::from_vertex_at(filtered);
        Box::new(std::iter::once(smaller))
    }
}
