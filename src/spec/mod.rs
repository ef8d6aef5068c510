//! Language specifications: the validated configuration an automaton is
//! built from.
//!
//! A [`LanguageSpec`] pins down the language "strings over `alphabet` that
//! end with `target_string` and contain `target_char` exactly
//! `required_count` times". It is an immutable value: once constructed it is
//! never modified, and the engine derives its whole state space from it.

pub mod error;

pub use error::SpecError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Validated description of a suffix-plus-count language.
///
/// Constructed via [`LanguageSpec::new`], which runs the full validation.
/// The engine re-runs [`LanguageSpec::validate`] at construction time, so a
/// spec that reached it through another path (e.g. deserialization) is
/// checked again rather than trusted.
///
/// The alphabet is held as a `BTreeSet`, which both deduplicates symbols
/// and gives the automaton a deterministic symbol order for its transition
/// table columns.
///
/// # Example
///
/// ```rust
/// use suffixcount::{LanguageSpec, SpecError};
///
/// let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
/// assert_eq!(spec.target_string(), "ab");
/// assert_eq!(spec.required_count(), 2);
///
/// // The counted symbol must belong to the alphabet.
/// let err = LanguageSpec::new(['a', 'b'], "ab", 'c', 2).unwrap_err();
/// assert_eq!(err, SpecError::TargetCharNotInAlphabet('c'));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LanguageSpec {
    alphabet: BTreeSet<char>,
    target_string: String,
    target_char: char,
    required_count: usize,
}

impl LanguageSpec {
    /// Create and validate a specification.
    ///
    /// Validation stops at the first failing check (see [`SpecError`] for
    /// the order); on failure no spec is returned.
    pub fn new(
        alphabet: impl IntoIterator<Item = char>,
        target_string: impl Into<String>,
        target_char: char,
        required_count: usize,
    ) -> Result<Self, SpecError> {
        let spec = Self {
            alphabet: alphabet.into_iter().collect(),
            target_string: target_string.into(),
            target_char,
            required_count,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Re-run the construction-time checks on this spec.
    ///
    /// Pure; returns the first violated constraint, if any.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.alphabet.is_empty() {
            return Err(SpecError::EmptyAlphabet);
        }
        if !self.alphabet.contains(&self.target_char) {
            return Err(SpecError::TargetCharNotInAlphabet(self.target_char));
        }
        if let Some(c) = self
            .target_string
            .chars()
            .find(|c| !self.alphabet.contains(c))
        {
            return Err(SpecError::TargetStringCharNotInAlphabet(c));
        }
        if self.required_count == 0 {
            return Err(SpecError::InvalidCount(self.required_count));
        }
        Ok(())
    }

    /// The alphabet, in its deterministic (ascending) order.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Check whether a symbol belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// The required trailing substring. May be empty, in which case the
    /// suffix condition is vacuously satisfied by every input.
    pub fn target_string(&self) -> &str {
        &self.target_string
    }

    /// The symbol whose occurrences are counted.
    pub fn target_char(&self) -> char {
        self.target_char
    }

    /// The exact number of occurrences required for acceptance.
    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Length of the target string in symbols (the maximum `progress`).
    pub fn target_len(&self) -> usize {
        self.target_string.chars().count()
    }
}
