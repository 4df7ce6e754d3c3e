//! Display-layer configuration: playback pacing and example presets.
//!
//! None of this affects the engine. The interval only paces
//! [`crate::playback::Player`], and presets are ordinary inputs that can be
//! re-run through [`crate::validator::validate`] at any time.
//!
//! Checks accumulate every violation instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use identifier_dfa::config::DemoConfig;
//!
//! let config = DemoConfig::from_json(r#"{ "playback": { "interval_ms": 200 } }"#).unwrap();
//! assert_eq!(config.playback.interval_ms, 200);
//! assert_eq!(config.presets.len(), 6);
//!
//! assert!(DemoConfig::from_json(r#"{ "playback": { "interval_ms": 5 } }"#).is_err());
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::validator::{validate, ValidationOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

pub const MIN_INTERVAL_MS: u64 = 100;
pub const MAX_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_INTERVAL_MS: u64 = 500;
pub const INTERVAL_STEP_MS: u64 = 100;

/// Pacing of step-by-step playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay before each step is shown
    pub interval_ms: u64,
}

impl PlaybackConfig {
    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Range is checked first; an out-of-range value reports only that.
    fn check_interval(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            Validation::fail(ConfigViolation::IntervalOutOfRange {
                interval_ms: self.interval_ms,
                min_ms: MIN_INTERVAL_MS,
                max_ms: MAX_INTERVAL_MS,
            })
        } else if self.interval_ms % INTERVAL_STEP_MS != 0 {
            Validation::fail(ConfigViolation::IntervalNotOnStep {
                interval_ms: self.interval_ms,
                step_ms: INTERVAL_STEP_MS,
            })
        } else {
            Validation::success(())
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::with_interval_ms(DEFAULT_INTERVAL_MS)
    }
}

/// A named example input for demonstration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub expected_valid: bool,
}

impl Preset {
    pub fn new(name: &str, description: &str, expected_valid: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            expected_valid,
        }
    }

    /// Validate the preset's name with its description.
    pub fn run(&self) -> ValidationOutcome {
        validate(&self.name, Some(&self.description))
    }
}

/// The presets offered by default.
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("myVariable", "A variable to store user data", true),
        Preset::new("_counter", "A counter for iterations", true),
        Preset::new("x123", "X-coordinate position", true),
        Preset::new("123abc", "ID number with prefix", false),
        Preset::new("my-var", "My special variable", false),
        Preset::new("$price", "Price of an item", false),
    ]
}

/// Everything the display layer is configured with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            presets: default_presets(),
        }
    }
}

impl DemoConfig {
    /// Parse and check a JSON document. Missing sections take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(errors) => {
                for violation in errors.iter() {
                    warn!(%violation, "rejecting configuration");
                }
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Run every check, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(self.playback.check_interval());

        let mut seen = HashSet::new();
        for (position, preset) in self.presets.iter().enumerate() {
            let check = if preset.name.is_empty() {
                Validation::fail(ConfigViolation::EmptyPresetName { position })
            } else if !seen.insert(preset.name.as_str()) {
                Validation::fail(ConfigViolation::DuplicatePresetName {
                    name: preset.name.clone(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
