//! States of the identifier automaton.
//!
//! The automaton has exactly three states. All methods are pure and the
//! set is closed, so states are a plain enum rather than a trait family.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state of the identifier automaton.
///
/// - `Start` (`q0`) is the unique initial state.
/// - `Accept` (`q1`) is the unique accepting state.
/// - `Reject` (`qR`) is absorbing: every character maps it to itself.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::DfaState;
///
/// let state = DfaState::initial();
/// assert_eq!(state.id(), "q0");
/// assert!(!state.is_accepting());
///
/// assert!(DfaState::Accept.is_accepting());
/// assert!(DfaState::Reject.is_absorbing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DfaState {
    Start,
    Accept,
    Reject,
}

impl DfaState {
    /// Every state, in table order.
    pub const ALL: [DfaState; 3] = [Self::Start, Self::Accept, Self::Reject];

    /// The state every run begins in.
    pub const fn initial() -> Self {
        Self::Start
    }

    /// Short identifier used in diagrams (`q0`, `q1`, `qR`).
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Start => "q0",
            Self::Accept => "q1",
            Self::Reject => "qR",
        }
    }

    /// Human-readable label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start State",
            Self::Accept => "Accept State",
            Self::Reject => "Reject State",
        }
    }

    /// Check if reaching this state at end of input accepts the string.
    pub const fn is_accepting(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Check if no transition can leave this state.
    pub const fn is_absorbing(&self) -> bool {
        matches!(self, Self::Reject)
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Start => 0,
            Self::Accept => 1,
            Self::Reject => 2,
        }
    }
}

impl Default for DfaState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for DfaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_diagram_names() {
        assert_eq!(DfaState::Start.id(), "q0");
        assert_eq!(DfaState::Accept.id(), "q1");
        assert_eq!(DfaState::Reject.id(), "qR");
    }

    #[test]
    fn exactly_one_accepting_state() {
        let accepting: Vec<_> = DfaState::ALL
            .iter()
            .filter(|s| s.is_accepting())
            .collect();
        assert_eq!(accepting, vec![&DfaState::Accept]);
    }

    #[test]
    fn only_reject_is_absorbing() {
        assert!(!DfaState::Start.is_absorbing());
        assert!(!DfaState::Accept.is_absorbing());
        assert!(DfaState::Reject.is_absorbing());
    }

    #[test]
    fn initial_state_is_start() {
        assert_eq!(DfaState::initial(), DfaState::Start);
        assert_eq!(DfaState::default(), DfaState::Start);
    }

    #[test]
    fn indices_follow_table_order() {
        for (i, state) in DfaState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn display_uses_id() {
        assert_eq!(DfaState::Reject.to_string(), "qR");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = DfaState::Accept;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DfaState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
