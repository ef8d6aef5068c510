//! Validation errors for language specifications.

use thiserror::Error;

/// Errors that can occur when validating a language specification.
///
/// Validation stops at the first failing check, in the order the variants
/// are listed here; at most one error is reported per attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Alphabet is empty. Provide at least one symbol")]
    EmptyAlphabet,

    #[error("Counted symbol '{0}' is not in the alphabet")]
    TargetCharNotInAlphabet(char),

    #[error("Target string symbol '{0}' is not in the alphabet")]
    TargetStringCharNotInAlphabet(char),

    #[error("Required count must be at least 1, got {0}")]
    InvalidCount(usize),
}
