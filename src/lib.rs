//! Identifier DFA: a deterministic finite automaton for identifier names
//!
//! The automaton recognizes identifiers that start with an ASCII letter or
//! underscore followed by ASCII letters, digits or underscores. Running it
//! produces the full ordered trace of transitions, so a display layer can
//! animate the simulation one character at a time without re-running it.
//!
//! The engine is pure: it computes eagerly, never fails, and holds no state
//! between calls. Timing lives in [`playback`], configuration in [`config`].
//!
//! # Core Concepts
//!
//! - **States**: `Start` (`q0`), `Accept` (`q1`) and the absorbing `Reject` (`qR`)
//! - **Transition table**: a static, total map from state × character class
//! - **Trace**: immutable, indexable record of every transition taken
//! - **Analyzer**: naming heuristics scored against a free-text description
//!
//! # Example
//!
//! ```rust
//! use identifier_dfa::core::{DfaState, RuleCategory};
//! use identifier_dfa::validator::validate;
//!
//! let outcome = validate("myVariable", Some("A variable to store user data"));
//! assert!(outcome.result.accepted);
//! assert_eq!(outcome.result.trace.len(), 10);
//!
//! let outcome = validate("my-var", None);
//! let step = outcome.result.trace.get(2).unwrap();
//! assert_eq!(step.character, '-');
//! assert_eq!(step.to, DfaState::Reject);
//! assert_eq!(step.category, RuleCategory::InvalidContinuation);
//! ```

pub mod analyzer;
pub mod config;
pub mod core;
pub mod engine;
pub mod playback;
pub mod report;
pub mod validator;

// Re-export commonly used types
pub use analyzer::{OverallLabel, Recommendation};
pub use crate::core::{DfaState, RuleCategory, Trace, TraceStep};
pub use engine::SimulationResult;
pub use validator::{get_recommendation, run_validation, validate, ValidationOutcome};
