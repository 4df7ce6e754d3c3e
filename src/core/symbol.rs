//! Character classes the transition table is indexed by.

use serde::{Deserialize, Serialize};

/// Partition of input characters as seen by the automaton.
///
/// Only ASCII letters and digits are recognized. Everything else, including
/// non-ASCII letters and control characters, is `Other`.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::core::CharClass;
///
/// assert_eq!(CharClass::of('a'), CharClass::Letter);
/// assert_eq!(CharClass::of('7'), CharClass::Digit);
/// assert_eq!(CharClass::of('_'), CharClass::Underscore);
/// assert_eq!(CharClass::of('é'), CharClass::Other);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CharClass {
    Letter,
    Digit,
    Underscore,
    Other,
}

impl CharClass {
    /// Every class, in table order.
    pub const ALL: [CharClass; 4] = [Self::Letter, Self::Digit, Self::Underscore, Self::Other];

    /// Classify a single character.
    pub const fn of(ch: char) -> Self {
        if ch.is_ascii_alphabetic() {
            Self::Letter
        } else if ch.is_ascii_digit() {
            Self::Digit
        } else if ch == '_' {
            Self::Underscore
        } else {
            Self::Other
        }
    }

    /// Short description used on diagram edges.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Digit => "digit",
            Self::Underscore => "underscore",
            Self::Other => "other",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Letter => 0,
            Self::Digit => 1,
            Self::Underscore => 2,
            Self::Other => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_letters() {
        for ch in ('a'..='z').chain('A'..='Z') {
            assert_eq!(CharClass::of(ch), CharClass::Letter);
        }
    }

    #[test]
    fn ascii_digits_are_digits() {
        for ch in '0'..='9' {
            assert_eq!(CharClass::of(ch), CharClass::Digit);
        }
    }

    #[test]
    fn symbols_and_whitespace_are_other() {
        for ch in ['-', '$', ' ', '\t', '\0', '.', '@'] {
            assert_eq!(CharClass::of(ch), CharClass::Other);
        }
    }

    #[test]
    fn unicode_letters_are_other() {
        assert_eq!(CharClass::of('ß'), CharClass::Other);
        assert_eq!(CharClass::of('Ж'), CharClass::Other);
        assert_eq!(CharClass::of('٣'), CharClass::Other);
    }

    #[test]
    fn indices_follow_table_order() {
        for (i, class) in CharClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }
}
