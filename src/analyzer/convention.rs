//! Naming-convention patterns.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! name_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

name_pattern!(RE_CAMEL_BODY, r"^[a-z][a-zA-Z0-9_]*$");
name_pattern!(RE_HAS_UPPER, r"[A-Z]");
name_pattern!(RE_PASCAL, r"^[A-Z][a-zA-Z0-9_]*$");
name_pattern!(RE_SNAKE_BODY, r"^[a-z][a-z0-9_]*$");
name_pattern!(RE_ALL_CAPS, r"^[A-Z][A-Z0-9_]*$");
name_pattern!(RE_HUNGARIAN, r"^[a-z][a-z][A-Z]");
name_pattern!(RE_UNINFORMATIVE_PREFIX, r"^(tmp|temp|var|my)[A-Z]");

fn matches_pattern(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Case convention of an identifier, by first match in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaseConvention {
    Camel,
    Pascal,
    Snake,
    AllCaps,
}

impl CaseConvention {
    /// Classify `identifier`.
    ///
    /// PascalCase is tested before ALL_CAPS and matches every name ALL_CAPS
    /// would, so `AllCaps` is never produced for a name made of word
    /// characters.
    pub fn classify(identifier: &str) -> Option<Self> {
        if matches_pattern(&RE_CAMEL_BODY, identifier)
            && matches_pattern(&RE_HAS_UPPER, identifier)
            && !identifier.starts_with('_')
        {
            Some(Self::Camel)
        } else if matches_pattern(&RE_PASCAL, identifier) {
            Some(Self::Pascal)
        } else if matches_pattern(&RE_SNAKE_BODY, identifier) && identifier.contains('_') {
            Some(Self::Snake)
        } else if matches_pattern(&RE_ALL_CAPS, identifier) {
            Some(Self::AllCaps)
        } else {
            None
        }
    }
}

/// Two lowercase letters followed by an uppercase one, e.g. `szName`.
pub fn is_hungarian(identifier: &str) -> bool {
    matches_pattern(&RE_HUNGARIAN, identifier)
}

/// `tmp`, `temp`, `var` or `my` directly followed by an uppercase letter.
pub fn has_uninformative_prefix(identifier: &str) -> bool {
    matches_pattern(&RE_UNINFORMATIVE_PREFIX, identifier)
}
