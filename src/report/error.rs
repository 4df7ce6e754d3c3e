//! Errors from writing or reading validation reports.

use thiserror::Error;

/// Why a report could not be written or read back.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be encoded as JSON or bincode
    #[error("Failed to encode report: {0}")]
    SerializationFailed(String),

    /// The bytes are not a report: malformed JSON, truncated bincode, or a
    /// document missing the trace or verdict
    #[error("Failed to decode report: {0}")]
    DeserializationFailed(String),

    /// The report decoded but was written with a different format version
    #[error("Report format version {found} cannot be read, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
