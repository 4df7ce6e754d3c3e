//! Execution traces.
//!
//! A trace is the ordered record of every transition taken while consuming
//! an input string. The engine builds them internally; `record` lets callers
//! assemble one by hand, e.g. for fixtures.

use super::state::DfaState;
use super::transition::RuleCategory;
use serde::{Deserialize, Serialize};

/// Record of a single character being consumed.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::{DfaState, RuleCategory, TraceStep};
///
/// let step = TraceStep {
///     index: 0,
///     character: 'a',
///     from: DfaState::Start,
///     to: DfaState::Accept,
///     category: RuleCategory::ValidStart,
/// };
/// assert!(!step.is_rejecting());
/// assert_eq!(step.edge(), (DfaState::Start, DfaState::Accept));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TraceStep {
    /// Character position in the input (not byte offset)
    pub index: usize,
    /// The character consumed
    pub character: char,
    /// The state being transitioned from
    pub from: DfaState,
    /// The state being transitioned to
    pub to: DfaState,
    /// Why the transition fired
    pub category: RuleCategory,
}

impl TraceStep {
    /// The diagram edge this step travels along.
    pub fn edge(&self) -> (DfaState, DfaState) {
        (self.from, self.to)
    }

    /// Check if the step leaves the input in the reject state.
    pub fn is_rejecting(&self) -> bool {
        self.to.is_absorbing()
    }
}

/// Ordered sequence of trace steps.
///
/// Steps are strictly ordered by input index. A trace can be read all at
/// once, step by step through [`Trace::get`], or as a prefix; none of these
/// carry a cursor, so the same trace can be replayed any number of times.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::{DfaState, RuleCategory, Trace, TraceStep};
///
/// let trace = Trace::new().record(TraceStep {
///     index: 0,
///     character: '_',
///     from: DfaState::Start,
///     to: DfaState::Accept,
///     category: RuleCategory::ValidStart,
/// });
///
/// assert_eq!(trace.len(), 1);
/// assert_eq!(trace.path(), vec![DfaState::Start, DfaState::Accept]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step by value, for building traces by hand.
    pub fn record(mut self, step: TraceStep) -> Self {
        self.steps.push(step);
        self
    }

    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the initial state followed by the `to` state of every
    /// step. An empty trace has only the initial state on its path.
    pub fn path(&self) -> Vec<DfaState> {
        let first = self
            .steps
            .first()
            .map_or(DfaState::initial(), |step| step.from);
        std::iter::once(first)
            .chain(self.steps.iter().map(|step| step.to))
            .collect()
    }

    /// Get all steps.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Get step `index`, if the input was that long.
    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    /// Iterate over steps in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first `len` steps as a trace of their own.
    ///
    /// `len` is clamped to the trace length.
    pub fn prefix(&self, len: usize) -> Self {
        let end = len.min(self.steps.len());
        Self {
            steps: self.steps[..end].to_vec(),
        }
    }

    /// The state reached after the last step, or the initial state.
    pub fn final_state(&self) -> DfaState {
        self.steps
            .last()
            .map_or(DfaState::initial(), |step| step.to)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
