//! Core value types shared between the engine and its consumers.
//!
//! These are plain immutable data: the `(progress, count)` state pair and
//! the `(from, symbol, to)` edge record that traces and the materialized
//! transition table are made of.

pub mod state;
pub mod trace;

pub use state::DfaState;
pub use trace::TraceStep;
