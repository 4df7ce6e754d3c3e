//! Configuration errors.

use thiserror::Error;

/// A single problem found while checking a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Playback interval {interval_ms}ms outside allowed range {min_ms}..={max_ms}ms")]
    IntervalOutOfRange {
        interval_ms: u64,
        min_ms: u64,
        max_ms: u64,
    },

    #[error("Playback interval {interval_ms}ms is not a multiple of {step_ms}ms")]
    IntervalNotOnStep { interval_ms: u64, step_ms: u64 },

    #[error("Preset #{position} has an empty name")]
    EmptyPresetName { position: usize },

    #[error("Preset name '{name}' is used more than once")]
    DuplicatePresetName { name: String },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the configuration shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but failed one or more checks
    #[error("Invalid configuration ({} violation(s))", .0.len())]
    Invalid(Vec<ConfigViolation>),
}
