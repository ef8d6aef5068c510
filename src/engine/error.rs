//! Evaluation errors.

use thiserror::Error;

/// Errors that can occur while evaluating an input string.
///
/// Raised by [`Dfa::accepts`](crate::Dfa::accepts) and
/// [`Dfa::run`](crate::Dfa::run). [`Dfa::trace`](crate::Dfa::trace)
/// deliberately does not raise it: an invalid symbol ends a trace early
/// instead, so a renderer can still draw the valid prefix of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Input symbol '{0}' is not in the alphabet")]
    InvalidSymbol(char),
}
