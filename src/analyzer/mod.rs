//! Heuristic name-quality analysis for accepted identifiers.
//!
//! The analyzer is advisory. It never fails; a name that triggers no rule
//! simply gets a sparse recommendation with a base label.
//!
//! Checks are independent and each adds at most one positive or one
//! suggestion:
//!
//! | Check              | Score | Message                          |
//! |--------------------|-------|----------------------------------|
//! | camelCase          | +2    | positive                         |
//! | PascalCase         |       | suggestion                       |
//! | snake_case         | +1    | positive                         |
//! | ALL_CAPS           |       | suggestion                       |
//! | Hungarian prefix   |       | suggestion                       |
//! | length 3..=15      | +1    | positive                         |
//! | too short / long   |       | suggestion                       |
//! | keyword overlap    | +2    | positive, else purpose suggestion|
//! | leading underscore |       | suggestion                       |
//! | `tmp`/`my` prefix  |       | suggestion                       |

mod convention;
mod keywords;
mod recommendation;

pub use convention::{has_uninformative_prefix, is_hungarian, CaseConvention};
pub use keywords::{extract_keywords, infer_category, matching_keywords};
pub use recommendation::{OverallLabel, Recommendation};

use tracing::debug;

/// Conventional one-letter names that are not flagged as too short.
pub const SHORT_NAME_ALLOW_LIST: &[&str] = &["i", "j", "k", "x", "y", "z"];

pub const MIN_LENGTH: usize = 3;
pub const MAX_GOOD_LENGTH: usize = 15;
pub const MAX_LENGTH: usize = 25;

/// Score `identifier` against naming heuristics and `description`.
///
/// Returns `None` when there is no semantic context to score against: an
/// empty or whitespace-only description, or an empty identifier.
///
/// # Example
///
/// ```rust
/// use identifier_dfa::analyzer::{analyze, OverallLabel};
///
/// let rec = analyze("itemPrice", "Price of an item").unwrap();
/// assert_eq!(rec.score, 5);
/// assert_eq!(rec.label, OverallLabel::Great);
///
/// assert!(analyze("itemPrice", "").is_none());
/// ```
pub fn analyze(identifier: &str, description: &str) -> Option<Recommendation> {
    if identifier.is_empty() || description.trim().is_empty() {
        return None;
    }

    let mut score = 0u8;
    let mut positives = Vec::new();
    let mut suggestions = Vec::new();

    match CaseConvention::classify(identifier) {
        Some(CaseConvention::Camel) => {
            score += 2;
            positives.push("Uses camelCase notation, which is ideal for variables".to_string());
        }
        Some(CaseConvention::Pascal) => suggestions.push(
            "Consider using camelCase instead of PascalCase for variables \
             (PascalCase is typically used for classes)"
                .to_string(),
        ),
        Some(CaseConvention::Snake) => {
            score += 1;
            positives.push(
                "Uses snake_case, which is readable but consider camelCase for better convention"
                    .to_string(),
            );
        }
        Some(CaseConvention::AllCaps) => suggestions.push(
            "ALL_CAPS naming is typically reserved for constants, not variables".to_string(),
        ),
        None => {}
    }

    if is_hungarian(identifier) {
        suggestions.push(
            "Avoid Hungarian notation (type prefixes like 'strName') as it's considered outdated"
                .to_string(),
        );
    }

    let length = identifier.chars().count();
    if length < MIN_LENGTH && !SHORT_NAME_ALLOW_LIST.contains(&identifier) {
        suggestions.push(
            "Variable name is very short. Consider a more descriptive name unless it's a \
             well-known convention (like 'i' for loops)"
                .to_string(),
        );
    } else if length > MAX_LENGTH {
        suggestions.push("Variable name is very long. Consider a more concise name".to_string());
    } else if (MIN_LENGTH..=MAX_GOOD_LENGTH).contains(&length) {
        score += 1;
        positives.push("Name length is appropriate".to_string());
    }

    let keywords = extract_keywords(description);
    let found = matching_keywords(identifier, &keywords);
    if !found.is_empty() {
        score += 2;
        positives.push(format!(
            "Name reflects its purpose (contains keywords: {})",
            found.join(", ")
        ));
    } else if let Some(category) = infer_category(description) {
        if !identifier
            .to_lowercase()
            .contains(&category.to_lowercase())
        {
            suggestions.push(format!(
                "Consider including \"{category}\" in the name to reflect its purpose"
            ));
        }
    }

    if identifier.starts_with('_') {
        suggestions.push(
            "Leading underscore is often used for private properties/variables, \
             be sure this is intentional"
                .to_string(),
        );
    }

    if has_uninformative_prefix(identifier) {
        suggestions
            .push("Avoid uninformative prefixes like 'tmp', 'temp', 'var', or 'my'".to_string());
    }

    let recommendation = Recommendation::new(score, positives, suggestions);
    debug!(
        identifier,
        score = recommendation.score,
        label = %recommendation.label,
        suggestions = recommendation.suggestions.len(),
        "name analyzed"
    );
    Some(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_yields_none() {
        assert!(analyze("counter", "").is_none());
        assert!(analyze("counter", "   \t").is_none());
    }

    #[test]
    fn empty_identifier_yields_none() {
        assert!(analyze("", "a counter").is_none());
    }

    #[test]
    fn camel_case_with_keyword_overlap() {
        // "variable" survives filtering and is contained in "myvariable".
        let rec = analyze("myVariable", "A variable to store user data").unwrap();
        assert_eq!(rec.score, 5);
        assert_eq!(rec.label, OverallLabel::Great);
        assert_eq!(rec.positives.len(), 3);
        assert!(rec.positives[2].contains("variable"));
        // Hungarian pattern plus the "my" prefix.
        assert_eq!(rec.suggestions.len(), 2);
    }

    #[test]
    fn allow_listed_short_name_gets_no_length_message() {
        let rec = analyze("x", "X-coordinate position").unwrap();
        assert_eq!(rec.score, 0);
        assert_eq!(rec.label, OverallLabel::NeedsWork);
        assert!(rec.positives.is_empty());
        assert!(!rec.suggestions.iter().any(|s| s.contains("very short")));
        assert_eq!(
            rec.suggestions,
            vec!["Consider including \"Index\" in the name to reflect its purpose".to_string()]
        );
    }

    #[test]
    fn short_name_outside_allow_list_is_flagged() {
        let rec = analyze("ab", "something").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("very short")));
    }

    #[test]
    fn long_names_are_flagged() {
        let name = "thisIsAnExtremelyLongVariableName";
        let rec = analyze(name, "something").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("very long")));
        assert!(!rec.positives.iter().any(|p| p.contains("length")));
    }

    #[test]
    fn medium_length_names_get_no_length_message() {
        let name = "customerAccountNo"; // 17 characters
        let rec = analyze(name, "something").unwrap();
        assert!(!rec.positives.iter().any(|p| p.contains("length")));
        assert!(!rec.suggestions.iter().any(|s| s.contains("very")));
    }

    #[test]
    fn snake_case_scores_one() {
        let rec = analyze("user_id", "opaque").unwrap();
        // snake_case +1, length +1
        assert_eq!(rec.score, 2);
        assert_eq!(rec.label, OverallLabel::Good);
    }

    #[test]
    fn pascal_case_is_suggested_against() {
        let rec = analyze("UserName", "opaque").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("PascalCase")));
        assert_eq!(rec.score, 1);
    }

    #[test]
    fn all_caps_falls_under_pascal_case() {
        let rec = analyze("MAX_SIZE", "opaque").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("PascalCase")));
        assert!(!rec.suggestions.iter().any(|s| s.contains("ALL_CAPS")));
    }

    #[test]
    fn category_suggestion_when_no_keyword_matches() {
        let rec = analyze("total", "number of items").unwrap();
        assert!(rec
            .suggestions
            .iter()
            .any(|s| s.contains("\"Count\"")));
    }

    #[test]
    fn no_category_suggestion_when_name_contains_it() {
        let rec = analyze("retryCount", "number of retries").unwrap();
        assert!(!rec.suggestions.iter().any(|s| s.contains("Consider including")));
    }

    #[test]
    fn flag_descriptions_suggest_is() {
        let rec = analyze("enabled", "feature flag").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("\"Is\"")));
    }

    #[test]
    fn leading_underscore_is_advisory() {
        let rec = analyze("_counter", "A counter for iterations").unwrap();
        assert!(rec.suggestions.iter().any(|s| s.contains("underscore")));
        // length +1, "counter" keyword +2
        assert_eq!(rec.score, 3);
    }

    #[test]
    fn uninformative_prefix_does_not_change_score() {
        let plain = analyze("tmpvalue", "opaque").unwrap();
        let prefixed = analyze("tmpValue", "opaque").unwrap();
        assert!(prefixed.suggestions.iter().any(|s| s.contains("uninformative")));
        assert!(!plain.suggestions.iter().any(|s| s.contains("uninformative")));
        // camelCase accounts for the whole difference
        assert_eq!(prefixed.score, plain.score + 2);
    }

    #[test]
    fn score_never_exceeds_maximum() {
        let rec = analyze("itemPrice", "Price of an item price").unwrap();
        assert!(rec.score <= Recommendation::MAX_SCORE);
        assert!(rec.positives[2].contains("price, item, price"));
    }
}
