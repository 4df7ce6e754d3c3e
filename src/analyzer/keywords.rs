//! Description keyword extraction and purpose inference.
//!
//! Both tables are literal and fixed. Matching is plain lowercase substring
//! containment; there is no stemming or word-boundary handling.

const STOP_WORDS: &[&str] = &["this", "that", "with", "from", "into", "onto", "for", "and", "the"];

/// Tokens of length up to this many characters are ignored.
const MIN_TOKEN_LEN: usize = 3;

/// Description fragments mapped to the word a name is expected to contain.
///
/// Checked in order; the first row with any matching fragment wins. The
/// flag row always yields `Is`, never `Has`.
const CATEGORY_TABLE: &[(&[&str], &str)] = &[
    (&["count", "number of", "counter"], "Count"),
    (&["index", "position"], "Index"),
    (&["flag", "boolean", "condition"], "Is"),
    (&["price", "cost", "amount"], "Amount"),
    (&["name", "label", "title"], "Name"),
    (&["date", "time"], "Date"),
    (&["list", "array", "collection"], "List"),
];

/// Lowercased description words that carry meaning.
///
/// Splits on whitespace, drops stop words and short tokens. Punctuation is
/// kept as part of the token.
pub fn extract_keywords(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_LEN && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Keywords that appear inside `identifier`, ignoring case.
pub fn matching_keywords(identifier: &str, keywords: &[String]) -> Vec<String> {
    let identifier = identifier.to_lowercase();
    keywords
        .iter()
        .filter(|word| identifier.contains(word.as_str()))
        .cloned()
        .collect()
}

/// Word a name with this description is expected to contain, if any.
pub fn infer_category(description: &str) -> Option<&'static str> {
    let description = description.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| description.contains(f)))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_short_tokens() {
        assert_eq!(
            extract_keywords("A variable to store user data"),
            vec!["variable", "store", "user", "data"]
        );
        assert!(extract_keywords("this that with from into onto").is_empty());
    }

    #[test]
    fn keeps_punctuation_inside_tokens() {
        assert_eq!(
            extract_keywords("X-coordinate position"),
            vec!["x-coordinate", "position"]
        );
    }

    #[test]
    fn collapses_repeated_whitespace() {
        assert_eq!(extract_keywords("  total\t\nprice  "), vec!["total", "price"]);
    }

    #[test]
    fn matches_case_insensitively() {
        let keywords = extract_keywords("User Count");
        assert_eq!(matching_keywords("activeUSERCount", &keywords), vec!["user", "count"]);
        assert!(matching_keywords("total", &keywords).is_empty());
    }

    #[test]
    fn infers_first_matching_category() {
        assert_eq!(infer_category("Number of retries"), Some("Count"));
        assert_eq!(infer_category("cursor position"), Some("Index"));
        assert_eq!(infer_category("Price of an item"), Some("Amount"));
        assert_eq!(infer_category("when it was created"), None);
    }

    #[test]
    fn counter_wins_over_later_rows() {
        assert_eq!(infer_category("a counter for list items"), Some("Count"));
    }

    #[test]
    fn flag_category_is_always_is() {
        // Flags map to "Is" even where "Has" would read better.
        assert_eq!(infer_category("flag set when user has access"), Some("Is"));
        assert_eq!(infer_category("boolean"), Some("Is"));
    }

    #[test]
    fn substring_matching_is_literal() {
        // "account" contains "count".
        assert_eq!(infer_category("bank account"), Some("Count"));
        // "timeout" contains "time".
        assert_eq!(infer_category("request timeout"), Some("Date"));
    }
}
