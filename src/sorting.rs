//! Counting-sort kernels reused by graph normalization and by the Branch &
//! Bound solver's border-vertex ranking.
//!
//! `spec.md` §9 calls out the original's templated counting sort (generic
//! over key functor and direction) as a case where generality bought
//! nothing: only two key types are ever sorted (a node id, for adjacency
//! normalization, and an assigned-neighbor count bounded by `n`, for the
//! solver's upper bound). We monomorphize to exactly those two call sites
//! instead of keeping the sort generic over an arbitrary key type.

use crate::Node;

/// Sort `values` ascending by their own value, where every value is known
/// to be `< bound`. Used to restore the ascending-adjacency invariant in
/// [`crate::graph::UndirectedGraph::normalize`] /
/// [`crate::graph::DirectedGraph::normalize`].
pub(crate) fn counting_sort_nodes(values: &mut [Node], bound: usize) {
    let mut counts = vec![0usize; bound + 1];
    for &v in values.iter() {
        counts[v] += 1;
    }
    let mut pos = 0usize;
    for (key, &count) in counts.iter().enumerate() {
        for slot in values[pos..pos + count].iter_mut() {
            *slot = key;
        }
        pos += count;
    }
}

/// Reusable scratch memory for [`counting_sort_by_key_non_increasing`], so
/// that a Branch & Bound instance can reuse one buffer across every
/// recursion frame instead of reallocating per call.
pub(crate) struct CountingSortScratch {
    counts: Vec<usize>,
}

impl CountingSortScratch {
    pub(crate) fn new(max_key: usize) -> Self {
        Self { counts: vec![0usize; max_key + 1] }
    }

    pub(crate) fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }
}

/// Sort `values` in non-increasing order of `key(v)`, where every key is
/// known to be `<= max_key` (`scratch` must have been built with that same
/// bound). This is the rearrangement-inequality ranking used by
/// [`crate::linarr::dmax::bnb::Solver::upper_bound_generic`] to sort
/// border vertices by their count of assigned neighbors.
pub(crate) fn counting_sort_by_key_non_increasing<T: Copy>(
    values: &mut [T],
    key: impl Fn(T) -> usize,
    scratch: &mut CountingSortScratch,
) {
    scratch.reset();
    for &v in values.iter() {
        scratch.counts[key(v)] += 1;
    }
    // Non-increasing: place the largest keys first.
    let max_key = scratch.counts.len() - 1;
    let original: Vec<T> = values.to_vec();
    let mut pos = 0usize;
    for key_value in (0..=max_key).rev() {
        let count = scratch.counts[key_value];
        if count == 0 {
            continue;
        }
        let mut written = 0usize;
        for &v in &original {
            if key(v) == key_value {
                values[pos + written] = v;
                written += 1;
                if written == count {
                    break;
                }
            }
        }
        pos += count;
    }
}
