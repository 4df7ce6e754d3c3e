//! Entry points consumed by the display layer.

use crate::analyzer::{analyze, Recommendation};
use crate::engine::{run, SimulationResult};
use serde::{Deserialize, Serialize};

/// Run the automaton over `input`.
pub fn run_validation(input: &str) -> SimulationResult {
    run(input)
}

/// Analyze an identifier the caller already knows to be accepted.
pub fn get_recommendation(identifier: &str, description: &str) -> Option<Recommendation> {
    analyze(identifier, description)
}

/// Verdict for one input plus, when accepted, its recommendation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub result: SimulationResult,
    pub recommendation: Option<Recommendation>,
}

/// Run the automaton and analyze the name if it was accepted.
///
/// ```rust
/// use identifier_dfa::validator::validate;
///
/// let outcome = validate("my-var", Some("My special variable"));
/// assert!(!outcome.result.accepted);
/// assert!(outcome.recommendation.is_none());
///
/// let outcome = validate("_counter", Some("A counter for iterations"));
/// assert!(outcome.result.accepted);
/// assert!(outcome.recommendation.is_some());
/// ```
pub fn validate(input: &str, description: Option<&str>) -> ValidationOutcome {
    let result = run_validation(input);
    let recommendation = match description {
        Some(description) if result.accepted => get_recommendation(input, description),
        _ => None,
    };
    ValidationOutcome {
        result,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_input_is_never_analyzed() {
        let outcome = validate("123abc", Some("ID number with prefix"));
        assert!(!outcome.result.accepted);
        assert!(outcome.recommendation.is_none());
    }

    #[test]
    fn missing_description_skips_analysis() {
        let outcome = validate("myVariable", None);
        assert!(outcome.result.accepted);
        assert!(outcome.recommendation.is_none());

        let outcome = validate("myVariable", Some(""));
        assert!(outcome.recommendation.is_none());
    }

    #[test]
    fn empty_input_is_rejected_without_analysis() {
        let outcome = validate("", Some("anything"));
        assert!(!outcome.result.accepted);
        assert!(outcome.recommendation.is_none());
    }

    #[test]
    fn facade_matches_components() {
        assert_eq!(run_validation("x123"), run("x123"));
        assert_eq!(
            get_recommendation("x123", "X-coordinate position"),
            analyze("x123", "X-coordinate position")
        );
    }

    #[test]
    fn outcome_serializes_for_display() {
        let outcome = validate("x123", Some("X-coordinate position"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["result"]["accepted"], true);
        assert_eq!(json["result"]["final_state"], "Accept");
        assert_eq!(json["result"]["trace"][0]["category"], "valid-start");
        assert!(json["recommendation"]["score"].is_number());
    }
}
