//! The closed enumeration of reasons the Branch & Bound solver may refuse
//! to place a candidate vertex at the current position, and the dispatch
//! decision the search loop takes at each node.
//!
//! Grounded on `spec.md` §4.8: "Filter `discard_vertex`. Returns a reason
//! in a closed enumeration." The reasons kept here are exactly the ones
//! for which the necessary-condition theory gives a value fully
//! determined at placement time under a strict left-to-right build (see
//! [`super::bnb`]'s module doc for why): the rest of the original's
//! reason list depends on information (lexicographic symmetry classes,
//! multi-step level predictions across not-yet-visited branchless path
//! segments) this port does not track.

/// Why a candidate vertex was rejected for the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonDiscard {
    /// Placing this vertex here would make the per-position level
    /// sequence increase, violating the non-increasing necessary
    /// condition.
    LevelSequenceWouldIncrease,
    /// This vertex would end up adjacent, in the graph, to an
    /// already-placed vertex of the same level.
    AdjacentEqualLevel,
    /// This vertex is an antenna's internal vertex and would become a
    /// thistle (level zero).
    AntennaThistle,
    /// This vertex is a bridge's internal vertex, would become a thistle,
    /// and the bridge already has one.
    BridgeSecondThistle,
}

/// What the dispatcher should do at the current search node.
///
/// `spec.md` §4.8 names two flavors of this shortcut,
/// *independent-set-leaves* (every remaining adjacency attaches a
/// degree-1 leaf to an already-assigned vertex) and the general
/// *independent-set* case; both place the optimal completion directly
/// by the same descending-level argument, so this port keeps one
/// variant rather than two (`SPEC_FULL.md` §3.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Branch normally over candidate vertices.
    Continue,
    /// The generic upper bound proves no improvement is possible: prune.
    Bound,
    /// No suffix-internal edges remain: every unassigned vertex's
    /// remaining edges all go into the fixed prefix, so the optimal
    /// completion can be built directly instead of searched.
    IndependentSetShortcut,
}
