//! Suffixcount: a deterministic finite automaton for suffix-plus-count languages
//!
//! Suffixcount decides whether an input string over a finite alphabet
//! simultaneously (a) ends with a required trailing substring and (b)
//! contains a designated symbol exactly a required number of times. The
//! automaton is synthesized directly from that description: states are
//! `(progress, count)` pairs, where `progress` is the KMP matched-prefix
//! length toward the trailing substring and `count` is a saturating
//! occurrence counter.
//!
//! The core is pure: construction eagerly builds the complete transition
//! table once, and every evaluation (`accepts`, `run`, `trace`) is a
//! read-only walk over it with a call-local cursor, so a built [`Dfa`] can
//! be shared freely across threads.
//!
//! # Core Concepts
//!
//! - **Spec**: a validated, immutable [`LanguageSpec`] describing the language
//! - **State**: the `(progress, count)` pair, [`DfaState`]
//! - **Trace**: the ordered list of [`TraceStep`] edges taken for one input
//!
//! # Example
//!
//! ```rust
//! use suffixcount::{Dfa, LanguageSpec};
//!
//! // Strings over {a, b} that end with "ab" and contain 'a' exactly twice.
//! let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).unwrap();
//! let dfa = Dfa::new(spec).unwrap();
//!
//! assert!(dfa.accepts("baab").unwrap());
//! assert!(!dfa.accepts("aabab").unwrap()); // 'a' occurs three times
//! assert!(!dfa.accepts("ba").unwrap()); // does not end with "ab"
//!
//! let trace = dfa.trace("baab");
//! assert_eq!(trace.len(), 4);
//! assert!(dfa.is_accepting(trace[3].to));
//! ```

pub mod core;
pub mod engine;
pub mod spec;

// Re-export commonly used types
pub use crate::core::{DfaState, TraceStep};
pub use crate::engine::{Dfa, EvalError};
pub use crate::spec::{LanguageSpec, SpecError};
