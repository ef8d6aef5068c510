//! State-space construction: failure function, transition rules, and the
//! complete precomputed table.
//!
//! The whole state space `(progress, count)` with
//! `progress ∈ [0, m]` and `count ∈ [0, required_count + 1]` is enumerated
//! once, and an outgoing edge is computed for every state and every
//! alphabet symbol. The table is total by construction; evaluation never
//! encounters a missing entry. Everything here is indexed by small
//! integers — states are flattened into a single list in construction
//! order (outer `progress` ascending, inner `count` ascending), and the
//! table maps `(state number, symbol index)` to a state number.

use crate::core::DfaState;
use crate::spec::LanguageSpec;

/// Precomputed state space and transition table for one spec.
#[derive(Clone, Debug)]
pub(crate) struct TransitionTable {
    /// All declared states, in construction order; the vector index is the
    /// state's stable sequence number.
    pub states: Vec<DfaState>,
    /// Alphabet symbols in ascending order; the table's column order.
    pub symbols: Vec<char>,
    /// `edges[state][symbol]` is the number of the successor state.
    pub edges: Vec<Vec<usize>>,
    /// `accepting[state]` mirrors the acceptance predicate per state.
    pub accepting: Vec<bool>,
    /// Width of one `progress` row, `required_count + 2`.
    counts_per_progress: usize,
}

impl TransitionTable {
    /// Eagerly build the full table for a validated spec.
    pub fn build(spec: &LanguageSpec) -> Self {
        let target: Vec<char> = spec.target_string().chars().collect();
        let fail = failure_function(&target);
        let required = spec.required_count();
        let symbols: Vec<char> = spec.alphabet().iter().copied().collect();
        let counts_per_progress = required + 2;

        let mut states = Vec::with_capacity((target.len() + 1) * counts_per_progress);
        for progress in 0..=target.len() {
            for count in 0..counts_per_progress {
                states.push(DfaState::new(progress, count));
            }
        }

        let accepting = states
            .iter()
            .map(|s| s.progress == target.len() && s.count == required)
            .collect();

        let edges = states
            .iter()
            .map(|state| {
                symbols
                    .iter()
                    .map(|&symbol| {
                        let progress = next_progress(&target, &fail, state.progress, symbol);
                        let count = next_count(state.count, required, symbol == spec.target_char());
                        progress * counts_per_progress + count
                    })
                    .collect()
            })
            .collect();

        Self {
            states,
            symbols,
            edges,
            accepting,
            counts_per_progress,
        }
    }

    /// Number of a declared state, or `None` if the pair lies outside the
    /// declared space.
    pub fn number_of(&self, state: DfaState) -> Option<usize> {
        let rows = self.states.len() / self.counts_per_progress;
        if state.progress >= rows || state.count >= self.counts_per_progress {
            return None;
        }
        Some(state.progress * self.counts_per_progress + state.count)
    }

    /// Column index of a symbol, or `None` if it is not in the alphabet.
    pub fn symbol_index(&self, symbol: char) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }
}

/// Standard KMP prefix function: `fail[i]` is the length of the longest
/// proper prefix of `target[..=i]` that is also a suffix of it.
pub(crate) fn failure_function(target: &[char]) -> Vec<usize> {
    let mut fail = vec![0; target.len()];
    let mut k = 0;
    for i in 1..target.len() {
        while k > 0 && target[i] != target[k] {
            k = fail[k - 1];
        }
        if target[i] == target[k] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

/// Progress update for one consumed symbol.
///
/// A full match restarts: acceptance only inspects the state at the final
/// position, so once `progress == m` further input is scanned as if fresh,
/// and only another complete trailing occurrence of the target can restore
/// full progress.
fn next_progress(target: &[char], fail: &[usize], progress: usize, symbol: char) -> usize {
    if target.is_empty() {
        return 0;
    }
    if progress == target.len() {
        return usize::from(symbol == target[0]);
    }
    let mut p = progress;
    while p > 0 && symbol != target[p] {
        p = fail[p - 1];
    }
    if symbol == target[p] {
        p + 1
    } else {
        0
    }
}

/// Count update: clamped increment on a hit, unchanged otherwise.
///
/// The clamp at `required + 1` keeps the state space finite; the saturated
/// value is the overflow marker and can never decrease.
fn next_count(count: usize, required: usize, hit: bool) -> usize {
    if hit {
        (count + 1).min(required + 1)
    } else {
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn failure_function_matches_known_patterns() {
        assert_eq!(failure_function(&chars("")), Vec::<usize>::new());
        assert_eq!(failure_function(&chars("a")), vec![0]);
        assert_eq!(failure_function(&chars("aa")), vec![0, 1]);
        assert_eq!(failure_function(&chars("ab")), vec![0, 0]);
        assert_eq!(failure_function(&chars("abab")), vec![0, 0, 1, 2]);
        assert_eq!(
            failure_function(&chars("ababaca")),
            vec![0, 0, 1, 2, 3, 0, 1]
        );
    }

    #[test]
    fn progress_extends_on_match() {
        let target = chars("ab");
        let fail = failure_function(&target);
        assert_eq!(next_progress(&target, &fail, 0, 'a'), 1);
        assert_eq!(next_progress(&target, &fail, 1, 'b'), 2);
    }

    #[test]
    fn progress_falls_back_on_mismatch() {
        let target = chars("abab");
        let fail = failure_function(&target);
        // After "aba", an 'a' falls back to the "a" prefix and extends it.
        assert_eq!(next_progress(&target, &fail, 3, 'a'), 2);
        // After "ab", another 'b' matches nothing.
        assert_eq!(next_progress(&target, &fail, 2, 'b'), 0);
    }

    #[test]
    fn full_match_restarts_scanning() {
        let target = chars("aa");
        let fail = failure_function(&target);
        // From the matched state, an 'a' restarts at 1, not at fail-based 2.
        assert_eq!(next_progress(&target, &fail, 2, 'a'), 1);
        assert_eq!(next_progress(&target, &fail, 2, 'b'), 0);
    }

    #[test]
    fn empty_target_pins_progress_at_zero() {
        let target = chars("");
        let fail = failure_function(&target);
        assert_eq!(next_progress(&target, &fail, 0, 'a'), 0);
    }

    #[test]
    fn count_saturates_one_past_required() {
        assert_eq!(next_count(0, 2, true), 1);
        assert_eq!(next_count(2, 2, true), 3);
        assert_eq!(next_count(3, 2, true), 3);
        assert_eq!(next_count(3, 2, false), 3);
        assert_eq!(next_count(1, 2, false), 1);
    }

    #[test]
    fn table_enumerates_full_state_space() {
        let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
        let table = TransitionTable::build(&spec);
        // (2 + 1) progress values x (2 + 2) count values.
        assert_eq!(table.states.len(), 12);
        assert_eq!(table.states[0], DfaState::new(0, 0));
        assert_eq!(table.states[3], DfaState::new(0, 3));
        assert_eq!(table.states[4], DfaState::new(1, 0));
        assert_eq!(table.states[11], DfaState::new(2, 3));
    }

    #[test]
    fn table_is_total() {
        let spec = LanguageSpec::new(['a', 'b', 'c'], "abc", 'b', 1).unwrap();
        let table = TransitionTable::build(&spec);
        assert_eq!(table.edges.len(), table.states.len());
        for row in &table.edges {
            assert_eq!(row.len(), table.symbols.len());
            for &target in row {
                assert!(target < table.states.len());
            }
        }
    }

    #[test]
    fn accepting_flags_require_exact_count_and_full_progress() {
        let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
        let table = TransitionTable::build(&spec);
        for (n, state) in table.states.iter().enumerate() {
            let expect = state.progress == 2 && state.count == 2;
            assert_eq!(table.accepting[n], expect, "state {n}");
        }
    }

    #[test]
    fn number_of_rejects_out_of_range_states() {
        let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
        let table = TransitionTable::build(&spec);
        assert_eq!(table.number_of(DfaState::new(0, 0)), Some(0));
        assert_eq!(table.number_of(DfaState::new(2, 3)), Some(11));
        assert_eq!(table.number_of(DfaState::new(3, 0)), None);
        assert_eq!(table.number_of(DfaState::new(0, 4)), None);
    }

    #[test]
    fn symbol_index_follows_ascending_order() {
        let spec = LanguageSpec::new(['b', 'a', 'c'], "", 'a', 1).unwrap();
        let table = TransitionTable::build(&spec);
        assert_eq!(table.symbols, vec!['a', 'b', 'c']);
        assert_eq!(table.symbol_index('b'), Some(1));
        assert_eq!(table.symbol_index('z'), None);
    }
}
