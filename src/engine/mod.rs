//! The automaton engine: construction, evaluation, and introspection.

pub mod error;
pub mod table;

pub use error::EvalError;

use crate::core::{DfaState, TraceStep};
use crate::spec::{LanguageSpec, SpecError};
use table::TransitionTable;

/// A deterministic finite automaton for one suffix-plus-count language.
///
/// Construction validates the spec and eagerly precomputes the complete
/// state space and transition table; after that the automaton is immutable.
/// Every evaluation walks the table with a local cursor, so one `Dfa` may
/// serve any number of concurrent `accepts`/`run`/`trace` calls. For a new
/// spec, build a new `Dfa`.
///
/// # Example
///
/// ```rust
/// use suffixcount::{Dfa, EvalError, LanguageSpec};
///
/// let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
/// let dfa = Dfa::new(spec).unwrap();
///
/// assert!(dfa.accepts("baab").unwrap());
///
/// // `accepts` propagates unknown symbols; `trace` stops early instead.
/// assert_eq!(dfa.accepts("c"), Err(EvalError::InvalidSymbol('c')));
/// assert!(dfa.trace("c").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Dfa {
    spec: LanguageSpec,
    table: TransitionTable,
    start: usize,
}

impl Dfa {
    /// Validate the spec and build the automaton.
    ///
    /// The spec is re-validated here rather than trusted, since a
    /// `LanguageSpec` value may also arrive through deserialization.
    pub fn new(spec: LanguageSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let table = TransitionTable::build(&spec);
        let start = table
            .number_of(DfaState::START)
            .unwrap_or_default();
        Ok(Self { spec, table, start })
    }

    /// The spec this automaton was built from.
    pub fn spec(&self) -> &LanguageSpec {
        &self.spec
    }

    /// The alphabet in the deterministic order the transition table's
    /// columns use.
    pub fn alphabet(&self) -> &[char] {
        &self.table.symbols
    }

    /// The start state, `(0, 0)`.
    pub fn start_state(&self) -> DfaState {
        DfaState::START
    }

    /// Decide whether the automaton accepts `input`.
    ///
    /// Fails with [`EvalError::InvalidSymbol`] at the first input symbol
    /// outside the alphabet; the error carries the offending symbol and is
    /// never downgraded to a plain rejection.
    pub fn accepts(&self, input: &str) -> Result<bool, EvalError> {
        let end = self.run(input)?;
        Ok(self.is_accepting(end))
    }

    /// Run `input` to completion and return the final state.
    ///
    /// Consumers diff the final state's `progress` and `count` against the
    /// spec's targets to explain a rejection. Same error contract as
    /// [`Dfa::accepts`].
    pub fn run(&self, input: &str) -> Result<DfaState, EvalError> {
        let mut at = self.start;
        for symbol in input.chars() {
            let col = self
                .table
                .symbol_index(symbol)
                .ok_or(EvalError::InvalidSymbol(symbol))?;
            at = self.table.edges[at][col];
        }
        Ok(self.table.states[at])
    }

    /// Replay `input` and collect the edges taken, in order.
    ///
    /// Unlike [`Dfa::accepts`], an input symbol outside the alphabet does
    /// not raise: the trace simply stops before the offending transition,
    /// so a renderer can still draw the valid prefix of the walk. The
    /// result is recomputed fresh on every call and never longer than the
    /// input.
    pub fn trace(&self, input: &str) -> Vec<TraceStep> {
        let mut steps = Vec::new();
        let mut at = self.start;
        for symbol in input.chars() {
            let Some(col) = self.table.symbol_index(symbol) else {
                break;
            };
            let next = self.table.edges[at][col];
            steps.push(TraceStep {
                from: self.table.states[at],
                symbol,
                to: self.table.states[next],
            });
            at = next;
        }
        steps
    }

    /// Whether `state` is accepting: full progress and exactly the
    /// required count.
    pub fn is_accepting(&self, state: DfaState) -> bool {
        state.progress == self.spec.target_len() && state.count == self.spec.required_count()
    }

    /// Whether `state` has overflowed: the counted symbol occurred more
    /// often than required, so the count condition is permanently missed.
    /// Informational only; acceptance already excludes such states.
    pub fn is_overflow(&self, state: DfaState) -> bool {
        state.count > self.spec.required_count()
    }

    /// Snapshot of the full declared state list, in construction order
    /// (outer `progress` ascending, inner `count` ascending).
    pub fn states(&self) -> Vec<DfaState> {
        self.table.states.clone()
    }

    /// Stable sequence number of a state, or `None` for a pair outside the
    /// declared space. Numbers exist for labeling; lookups and equality
    /// never depend on them.
    pub fn state_number(&self, state: DfaState) -> Option<usize> {
        self.table.number_of(state)
    }

    /// Human-readable label for a state, e.g. `q3 (progress 1/2, count 1)`.
    pub fn format_state(&self, state: DfaState) -> String {
        let number = match self.state_number(state) {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };
        format!(
            "q{} (progress {}/{}, count {})",
            number,
            state.progress,
            self.spec.target_len(),
            state.count
        )
    }

    /// The complete materialized edge list, ordered by source state number
    /// and then by symbol. One entry per `(state, symbol)` pair.
    pub fn transitions(&self) -> Vec<TraceStep> {
        let mut edges = Vec::with_capacity(self.table.states.len() * self.table.symbols.len());
        for (from, row) in self.table.edges.iter().enumerate() {
            for (col, &to) in row.iter().enumerate() {
                edges.push(TraceStep {
                    from: self.table.states[from],
                    symbol: self.table.symbols[col],
                    to: self.table.states[to],
                });
            }
        }
        edges
    }
}
