//! Serializable snapshots of a validation.
//!
//! A report bundles the input, the full trace and verdict, and the
//! recommendation so an out-of-process display layer can render or replay
//! them. Reports are written as JSON or as compact bincode.

use crate::analyzer::Recommendation;
use crate::engine::SimulationResult;
use crate::validator::ValidationOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Everything known about one validation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: String,

    /// When the report was created
    pub generated_at: DateTime<Utc>,

    pub input: String,

    pub description: Option<String>,

    pub result: SimulationResult,

    pub recommendation: Option<Recommendation>,
}

impl ValidationReport {
    pub fn new(input: &str, description: Option<&str>, outcome: ValidationOutcome) -> Self {
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            input: input.to_string(),
            description: description.map(str::to_string),
            result: outcome.result,
            recommendation: outcome.recommendation,
        }
    }

    pub fn outcome(&self) -> ValidationOutcome {
        ValidationOutcome {
            result: self.result.clone(),
            recommendation: self.recommendation.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }
}
