//! The maximum-arrangement registry: a deduplicated set of optimal
//! arrangements, keyed by level isomorphism.
//!
//! Grounded on `spec.md` §4.7: "Keyed by *level isomorphism*: two
//! arrangements belong to the same class iff their level signatures are
//! equal or one equals the other's mirror. For each class, keeps one
//! representative, its signature, and a multiplicity."

use crate::level::mirror_levels;
use crate::Node;

/// One equivalence class of optimal arrangements: a representative, its
/// per-position level signature, and how many times this class has been
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangementClass {
    /// A representative arrangement of this class, as `vertex_at`.
    pub vertex_at: Vec<Node>,
    /// That representative's per-position level signature.
    pub signature: Vec<i64>,
    /// How many times a member of this class has been found.
    pub multiplicity: u64,
}

/// A deduplicated collection of maximum-value arrangements.
#[derive(Debug, Clone, Default)]
pub struct MaximumArrangementRegistry {
    value: u64,
    has_value: bool,
    classes: Vec<ArrangementClass>,
}

impl MaximumArrangementRegistry {
    /// An empty registry (no value recorded yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The best value recorded so far, or 0 if nothing has been added.
    #[must_use]
    pub fn current_max(&self) -> u64 {
        self.value
    }

    /// The distinct level-isomorphism classes recorded at the current
    /// maximum.
    #[must_use]
    pub fn classes(&self) -> &[ArrangementClass] {
        &self.classes
    }

    /// Record one occurrence of `vertex_at` (with per-position level
    /// signature `signature`) achieving `value`.
    pub fn add(&mut self, value: u64, vertex_at: Vec<Node>, signature: Vec<i64>) {
        self.add_with_multiplicity(value, vertex_at, signature, 1);
    }

    fn add_with_multiplicity(&mut self, value: u64, vertex_at: Vec<Node>, signature: Vec<i64>, multiplicity: u64) {
        if self.has_value && value < self.value {
            return;
        }
        if !self.has_value || value > self.value {
            self.value = value;
            self.has_value = true;
            self.classes.clear();
            self.classes.push(ArrangementClass { vertex_at, signature, multiplicity });
            return;
        }
        let mirrored = mirror_levels(&signature);
        if let Some(existing) = self.classes.iter_mut().find(|c| c.signature == signature || c.signature == mirrored) {
            existing.multiplicity += multiplicity;
        } else {
            self.classes.push(ArrangementClass { vertex_at, signature, multiplicity });
        }
    }

    /// Merge `other` into `self`, under the same rules `add` uses:
    /// whichever side has the strictly larger value wins outright; on a
    /// tie, classes combine (deduplicated by signature or its mirror).
    pub fn merge(&mut self, other: &Self) {
        for class in &other.classes {
            self.add_with_multiplicity(other.value, class.vertex_at.clone(), class.signature.clone(), class.multiplicity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_strictly_larger_value_replaces_everything() {
        let mut r = MaximumArrangementRegistry::new();
        r.add(5, vec![0, 1], vec![1, -1]);
        r.add(8, vec![1, 0], vec![-1, 1]);
        assert_eq!(r.current_max(), 8);
        assert_eq!(r.classes().len(), 1);
    }

    #[test]
    fn a_smaller_value_is_ignored() {
        let mut r = MaximumArrangementRegistry::new();
        r.add(8, vec![1, 0], vec![-1, 1]);
        r.add(5, vec![0, 1], vec![1, -1]);
        assert_eq!(r.current_max(), 8);
        assert_eq!(r.classes().len(), 1);
    }

    #[test]
    fn a_mirrored_signature_at_the_same_value_increments_multiplicity() {
        let mut r = MaximumArrangementRegistry::new();
        r.add(8, vec![0, 1, 2], vec![3, 2, 1]);
        // an exact repeat of the same signature collapses into the same
        // class.
        r.add(8, vec![0, 1, 2], vec![3, 2, 1]);
        // this signature is exactly the mirror (reverse + negate) of the
        // first, so it also collapses into the same class.
        r.add(8, vec![2, 1, 0], vec![-1, -2, -3]);
        // an unrelated signature starts a second class.
        r.add(8, vec![1, 0, 2], vec![0, 0, 0]);

        assert_eq!(r.classes().len(), 2);
        let total: u64 = r.classes().iter().map(|c| c.multiplicity).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn merge_keeps_only_the_larger_side() {
        let mut a = MaximumArrangementRegistry::new();
        a.add(5, vec![0, 1], vec![1, -1]);
        let mut b = MaximumArrangementRegistry::new();
        b.add(9, vec![1, 0], vec![-1, 1]);

        a.merge(&b);
        assert_eq!(a.current_max(), 9);
        assert_eq!(a.classes().len(), 1);
    }
}
