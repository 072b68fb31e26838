//! An O(1) insert/remove/contains set over a dense, bounded value domain,
//! used by the Branch & Bound solver to track the set of vertices still
//! available for placement without reallocating per recursion frame.
//!
//! Grounded on the original's `linear_set<value_t, indexer_t>`: a packed
//! `values` array (the elements currently in the set, in no particular
//! order), a parallel `position` array mapping a value to its slot in
//! `values`, and an `exists` bitset. Both `add` and `remove` are O(1): a
//! removal swaps the removed element with the last live element before
//! shrinking, so no tail has to shift.

use fixedbitset::FixedBitSet;

use crate::Node;

/// An O(1) set over `{0, .., capacity - 1}`.
#[derive(Debug, Clone)]
pub(crate) struct LinearSet {
    values: Vec<Node>,
    position: Vec<usize>,
    exists: FixedBitSet,
}

impl LinearSet {
    /// An empty set that can hold values in `0..capacity`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity), position: vec![0; capacity], exists: FixedBitSet::with_capacity(capacity) }
    }

    /// A set containing every value in `0..capacity`.
    pub(crate) fn full(capacity: usize) -> Self {
        let mut s = Self::new(capacity);
        for v in 0..capacity {
            s.add(v);
        }
        s
    }

    /// Number of elements currently in the set.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set has no elements.
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `v` is currently in the set.
    pub(crate) fn contains(&self, v: Node) -> bool {
        self.exists[v]
    }

    /// The elements currently in the set, in unspecified order.
    pub(crate) fn values(&self) -> &[Node] {
        &self.values
    }

    /// Insert `v`. Debug-asserts it was not already present.
    pub(crate) fn add(&mut self, v: Node) {
        debug_assert!(!self.exists[v], "value {v} already in the linear set");
        self.position[v] = self.values.len();
        self.values.push(v);
        self.exists.set(v, true);
    }

    /// Remove `v` by swapping it with the last live element. Debug-asserts
    /// it was present.
    pub(crate) fn remove(&mut self, v: Node) {
        debug_assert!(self.exists[v], "value {v} not in the linear set");
        let slot = self.position[v];
        let last = *self.values.last().unwrap();
        self.values[slot] = last;
        self.position[last] = slot;
        self.values.pop();
        self.exists.set(v, false);
    }
}
