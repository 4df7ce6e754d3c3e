//! Core automaton types.
//!
//! This module contains the pure definition of the identifier automaton:
//! - States via the `DfaState` enum
//! - Character classes the transition table is indexed by
//! - The static, total transition table
//! - Immutable execution traces
//!
//! Nothing in this module performs I/O or holds mutable global state.

mod state;
mod symbol;
mod trace;
mod transition;

pub use state::DfaState;
pub use symbol::CharClass;
pub use trace::{Trace, TraceStep};
pub use transition::{RuleCategory, Transition, TransitionRule, TransitionTable};
