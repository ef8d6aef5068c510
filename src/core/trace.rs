//! Transition edge records.

use super::state::DfaState;
use serde::{Deserialize, Serialize};

/// One edge of the automaton: `from --symbol--> to`.
///
/// The same type serves two consumers: [`Dfa::trace`](crate::Dfa::trace)
/// returns the edges actually taken while evaluating one input, in order,
/// and [`Dfa::transitions`](crate::Dfa::transitions) returns the complete
/// materialized table for rendering the automaton as a table or graph.
///
/// # Example
///
/// ```rust
/// use suffixcount::{Dfa, LanguageSpec};
///
/// let dfa = Dfa::new(LanguageSpec::new(['a', 'b'], "ab", 'a', 1).unwrap()).unwrap();
/// let trace = dfa.trace("ab");
///
/// assert_eq!(trace[0].from, dfa.start_state());
/// assert_eq!(trace[0].symbol, 'a');
/// assert_eq!(trace[0].to, trace[1].from);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TraceStep {
    /// The state the edge leaves.
    pub from: DfaState,
    /// The consumed input symbol.
    pub symbol: char,
    /// The state the edge enters.
    pub to: DfaState,
}
