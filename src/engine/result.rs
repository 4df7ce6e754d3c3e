//! Outcome of running the automaton over one input.

use crate::core::{DfaState, Trace, TraceStep};
use serde::{Deserialize, Serialize};

/// Full trace and verdict for one input string.
///
/// `accepted` holds exactly when `final_state` is the accepting state.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SimulationResult {
    pub trace: Trace,
    pub final_state: DfaState,
    pub accepted: bool,
}

impl SimulationResult {
    pub(crate) fn from_trace(trace: Trace) -> Self {
        let final_state = trace.final_state();
        Self {
            trace,
            final_state,
            accepted: final_state.is_accepting(),
        }
    }

    /// The result as it stood after the first `steps` characters.
    ///
    /// Animated callers use this to show partial progress without re-running
    /// the engine. `prefix(0)` is the empty-input result.
    ///
    /// ```rust
    /// use identifier_dfa::core::DfaState;
    /// use identifier_dfa::engine::run;
    ///
    /// let result = run("a-b");
    /// assert!(result.prefix(1).accepted);
    /// assert_eq!(result.prefix(2).final_state, DfaState::Reject);
    /// ```
    pub fn prefix(&self, steps: usize) -> Self {
        Self::from_trace(self.trace.prefix(steps))
    }

    /// The step that first moved the input into the reject state.
    pub fn first_rejection(&self) -> Option<&TraceStep> {
        self.trace
            .iter()
            .find(|step| step.is_rejecting() && !step.from.is_absorbing())
    }

    /// One-line diagnosis of why the input was rejected.
    ///
    /// Depends only on whether the first rejection happened on the first
    /// character or later. `None` for accepted and empty input.
    ///
    /// ```rust
    /// use identifier_dfa::engine::run;
    ///
    /// assert_eq!(
    ///     run("9lives").rejection_reason(),
    ///     Some("Variable names must start with a letter or underscore.")
    /// );
    /// assert_eq!(run("lives").rejection_reason(), None);
    /// ```
    pub fn rejection_reason(&self) -> Option<&'static str> {
        let step = self.first_rejection()?;
        Some(if step.from == DfaState::Start {
            "Variable names must start with a letter or underscore."
        } else {
            "Variable names can only contain letters, digits, and underscores."
        })
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }
}
