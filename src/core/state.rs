//! The automaton state pair.

use serde::{Deserialize, Serialize};

/// One automaton state: a `(progress, count)` pair.
///
/// `progress` is the KMP matched-prefix length — how many leading symbols
/// of the target string are matched by the longest extensible trailing run
/// of the input consumed so far. `count` is the number of occurrences of
/// the counted symbol seen so far, saturating at `required_count + 1`; the
/// saturated value marks the count condition as permanently missed.
///
/// States are small `Copy` values compared structurally; whether a state is
/// accepting or overflowed depends on the spec and is answered by the
/// engine ([`Dfa::is_accepting`](crate::Dfa::is_accepting),
/// [`Dfa::is_overflow`](crate::Dfa::is_overflow)).
///
/// # Example
///
/// ```rust
/// use suffixcount::DfaState;
///
/// let start = DfaState::START;
/// assert_eq!(start, DfaState::new(0, 0));
/// assert_eq!(start.progress, 0);
/// assert_eq!(start.count, 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DfaState {
    /// Matched-prefix length toward the target string.
    pub progress: usize,
    /// Saturating occurrence count of the counted symbol.
    pub count: usize,
}

impl DfaState {
    /// The start state: no progress, no occurrences seen.
    pub const START: DfaState = DfaState {
        progress: 0,
        count: 0,
    };

    /// Create a state from its components.
    pub fn new(progress: usize, count: usize) -> Self {
        Self { progress, count }
    }
}
