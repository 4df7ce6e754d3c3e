//! Executes the transition table against an input string.

use crate::core::{DfaState, Trace, TraceStep, TransitionTable};
use crate::engine::result::SimulationResult;
use tracing::debug;

/// Run the automaton over `input`.
///
/// Always succeeds. Empty input yields an empty trace that ends in the start
/// state and is therefore rejected.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::{DfaState, RuleCategory};
/// use identifier_dfa::engine::run;
///
/// let result = run("123abc");
/// assert!(!result.accepted);
///
/// let first = result.trace.get(0).unwrap();
/// assert_eq!(first.character, '1');
/// assert_eq!(first.to, DfaState::Reject);
/// assert_eq!(first.category, RuleCategory::InvalidStart);
/// ```
pub fn run(input: &str) -> SimulationResult {
    run_chars(input.chars())
}

/// Run the automaton over any sequence of characters.
pub fn run_chars<I>(input: I) -> SimulationResult
where
    I: IntoIterator<Item = char>,
{
    let mut trace = Trace::new();
    let mut state = DfaState::initial();

    for (index, character) in input.into_iter().enumerate() {
        let transition = TransitionTable::next(state, character);
        trace.push(TraceStep {
            index,
            character,
            from: state,
            to: transition.to,
            category: transition.category,
        });
        state = transition.to;
    }

    let result = SimulationResult::from_trace(trace);
    debug!(
        len = result.len(),
        final_state = %result.final_state,
        accepted = result.accepted,
        "simulation complete"
    );
    result
}
