//! The transition function of the identifier automaton.
//!
//! The function is a fixed 3×4 table indexed by `(DfaState, CharClass)`.
//! It is total: every state and every character class has exactly one entry.

use super::state::DfaState;
use super::symbol::CharClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a transition fired.
///
/// Categories exist for labeling in the display layer. The engine never
/// branches on them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    ValidStart,
    ValidContinuation,
    InvalidStart,
    InvalidContinuation,
    AlreadyRejected,
}

impl RuleCategory {
    /// Stable kebab-case name, e.g. `"valid-start"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidStart => "valid-start",
            Self::ValidContinuation => "valid-continuation",
            Self::InvalidStart => "invalid-start",
            Self::InvalidContinuation => "invalid-continuation",
            Self::AlreadyRejected => "already-rejected",
        }
    }

    /// Human-readable explanation shown next to a trace step.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ValidStart => "Valid first character (letter or underscore)",
            Self::ValidContinuation => "Valid continuation (letter, digit, or underscore)",
            Self::InvalidStart => "Invalid first character (must be letter or underscore)",
            Self::InvalidContinuation => {
                "Invalid character (only letters, digits, underscores allowed)"
            }
            Self::AlreadyRejected => "Already rejected",
        }
    }

    /// Check if this category keeps the input on an accepting path.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::ValidStart | Self::ValidContinuation)
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of a single table entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned to
    pub to: DfaState,
    /// The rule that selected this target
    pub category: RuleCategory,
}

/// One row of the table, for rendering the transition panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRule {
    pub from: DfaState,
    pub class: CharClass,
    pub to: DfaState,
    pub category: RuleCategory,
}

const fn entry(to: DfaState, category: RuleCategory) -> Transition {
    Transition { to, category }
}

use DfaState::{Accept, Reject};
use RuleCategory::*;

/// Rows are states (`Start`, `Accept`, `Reject`), columns are classes
/// (`Letter`, `Digit`, `Underscore`, `Other`).
static TABLE: [[Transition; 4]; 3] = [
    [
        entry(Accept, ValidStart),
        entry(Reject, InvalidStart),
        entry(Accept, ValidStart),
        entry(Reject, InvalidStart),
    ],
    [
        entry(Accept, ValidContinuation),
        entry(Accept, ValidContinuation),
        entry(Accept, ValidContinuation),
        entry(Reject, InvalidContinuation),
    ],
    [
        entry(Reject, AlreadyRejected),
        entry(Reject, AlreadyRejected),
        entry(Reject, AlreadyRejected),
        entry(Reject, AlreadyRejected),
    ],
];

/// Read-only view of the static transition table.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::{DfaState, RuleCategory, TransitionTable};
///
/// let t = TransitionTable::next(DfaState::Start, '_');
/// assert_eq!(t.to, DfaState::Accept);
/// assert_eq!(t.category, RuleCategory::ValidStart);
///
/// let t = TransitionTable::next(DfaState::Accept, '-');
/// assert_eq!(t.to, DfaState::Reject);
/// assert_eq!(t.category, RuleCategory::InvalidContinuation);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionTable;

impl TransitionTable {
    /// Apply the transition function to one character.
    pub fn next(state: DfaState, ch: char) -> Transition {
        Self::lookup(state, CharClass::of(ch))
    }

    /// Look up the entry for a state and character class.
    pub fn lookup(state: DfaState, class: CharClass) -> Transition {
        TABLE[state.index()][class.index()]
    }

    /// Every entry of the table, row by row.
    ///
    /// ```rust
    /// use identifier_dfa::core::TransitionTable;
    ///
    /// assert_eq!(TransitionTable::rules().count(), 12);
    /// ```
    pub fn rules() -> impl Iterator<Item = TransitionRule> {
        DfaState::ALL.into_iter().flat_map(|from| {
            CharClass::ALL.into_iter().map(move |class| {
                let t = Self::lookup(from, class);
                TransitionRule {
                    from,
                    class,
                    to: t.to,
                    category: t.category,
                }
            })
        })
    }
}
