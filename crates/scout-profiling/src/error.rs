//! Custom error types for the profiling engine.
//!
//! This module provides the error hierarchy using `thiserror`. All failures
//! are local, synchronous, and non-retryable: the caller must re-acquire
//! valid input. Either a full dataset/report is produced or none is.
//!
//! Errors are serializable so that presentation collaborators can forward
//! them to a frontend as a `{code, message}` pair.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// The main error type for dataset loading and analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// File extension is not in the supported set, or the format cannot be
    /// decoded by the engine itself.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Raw input exceeds the configured size ceiling.
    #[error("Input is {actual} bytes, exceeding the {limit} byte limit")]
    SizeLimitExceeded { actual: usize, limit: usize },

    /// Input has no lines, so no header can be read.
    #[error("Input is empty: no header line found")]
    EmptyInput,

    /// A header was parsed but the dataset has zero data rows.
    #[error("Dataset has a header but no data rows")]
    EmptyDataset,

    /// Reserved for a strict parsing mode. The lenient parser pads short
    /// rows and truncates long ones instead of failing.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Invalid analysis configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Get a stable error code for frontend handling.
    ///
    /// These codes let a presentation layer distinguish error kinds without
    /// parsing display strings.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::SizeLimitExceeded { .. } => "SIZE_LIMIT_EXCEEDED",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}

/// Serialize implementation for presentation-layer compatibility.
///
/// Errors are serialized as a struct with `code` and `message` fields,
/// making them easy to handle in a frontend.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AnalysisError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
