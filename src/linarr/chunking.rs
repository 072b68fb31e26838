//! Anderson's chunking algorithm: partition a rooted tree's vertices, in
//! arrangement order, into contiguous groups each governed by one head.
//!
//! Grounded on `spec.md` §4.10: "Anderson's partition marches
//! leftwards/rightwards from each internal head, assigning a chunk index
//! to the head's leaf children contiguous in π; unassigned leaves get
//! fresh chunk IDs; then relabel left-to-right." and on the
//! [glossary's](`spec.md` §GLOSSARY) definition of chunk as an "ordered
//! vertex set with an optional parent-chunk reference".

use crate::linarr::arrangement::LinearArrangement;
use crate::tree::RootedTree;
use crate::Node;

/// A contiguous (in arrangement order) group of vertices governed by a
/// single head, with an optional reference to the chunk containing that
/// head's tree-parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Vertices belonging to this chunk, in position order.
    pub vertices: Vec<Node>,
    /// The chunk containing this chunk's governing vertex's tree-parent,
    /// by index into the result vector. `None` for the chunk containing
    /// the tree's root.
    pub parent_chunk: Option<usize>,
}

/// Partition `rt`'s vertices into chunks under `arr`, following
/// Anderson's marching rule, then relabel left to right by each chunk's
/// leftmost position.
#[must_use]
pub fn anderson_chunks(rt: &RootedTree, arr: &LinearArrangement) -> Vec<Chunk> {
    let n = rt.num_nodes();
    if n == 0 {
        return Vec::new();
    }

    let is_leaf = |u: Node| rt.out_neighbors(u).is_empty();
    let mut chunk_of: Vec<Option<usize>> = vec![None; n];
    let mut next_id = 0usize;

    for h in 0..n {
        if is_leaf(h) {
            continue;
        }
        if chunk_of[h].is_none() {
            chunk_of[h] = Some(next_id);
            next_id += 1;
        }
        let id = chunk_of[h].unwrap();
        let p = arr.position(h);

        let mut q = p;
        while q > 0 {
            let cand = arr.vertex_at(q - 1);
            if chunk_of[cand].is_none() && is_leaf(cand) && rt.parent(cand) == Some(h) {
                chunk_of[cand] = Some(id);
                q -= 1;
            } else {
                break;
            }
        }

        let mut q = p;
        while q + 1 < n {
            let cand = arr.vertex_at(q + 1);
            if chunk_of[cand].is_none() && is_leaf(cand) && rt.parent(cand) == Some(h) {
                chunk_of[cand] = Some(id);
                q += 1;
            } else {
                break;
            }
        }
    }

    for u in 0..n {
        if chunk_of[u].is_none() {
            chunk_of[u] = Some(next_id);
            next_id += 1;
        }
    }

    let mut members: Vec<Vec<Node>> = vec![Vec::new(); next_id];
    for p in 0..n {
        let u = arr.vertex_at(p);
        members[chunk_of[u].unwrap()].push(u);
    }

    // the governing vertex of a chunk is the one member whose tree-parent
    // (if any) lies in a different chunk.
    let governor_of = |id: usize| -> Node {
        members[id]
            .iter()
            .copied()
            .find(|&u| rt.parent(u).map_or(true, |par| chunk_of[par] != Some(id)))
            .expect("every chunk has exactly one vertex not governed from within it")
    };

    let mut order: Vec<usize> = (0..next_id).collect();
    order.sort_by_key(|&id| arr.position(members[id][0]));

    let mut old_to_new = vec![0usize; next_id];
    for (new_id, &old_id) in order.iter().enumerate() {
        old_to_new[old_id] = new_id;
    }

    order
        .into_iter()
        .map(|old_id| {
            let governor = governor_of(old_id);
            let parent_chunk = rt.parent(governor).map(|par| old_to_new[chunk_of[par].unwrap()]);
            Chunk { vertices: members[old_id].clone(), parent_chunk }
        })
        .collect()
}
