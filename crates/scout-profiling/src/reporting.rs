//! Report output: JSON documents for export collaborators.
//!
//! The engine itself only returns an [`AnalysisReport`] value; this module
//! wraps one with generation metadata and writes it to disk for the CLI's
//! `--emit-report` flag and for library callers that want a file artifact.

use crate::error::Result;
use crate::types::AnalysisReport;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// An [`AnalysisReport`] wrapped with generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Timestamp when the document was generated.
    pub generated_at: String,
    /// Path of the profiled input file.
    pub input_file: String,
    /// The analysis report itself.
    pub report: AnalysisReport,
}

impl ProfileDocument {
    /// Wrap a report with the current timestamp.
    pub fn new(input_file: impl Into<String>, report: AnalysisReport) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.into(),
            report,
        }
    }
}

/// Writes profile documents into an output directory.
pub struct ProfileReportWriter {
    output_dir: PathBuf,
    output_name: Option<String>,
}

impl ProfileReportWriter {
    /// Create a writer targeting `output_dir`. When `output_name` is `None`
    /// the file name defaults to `<input_stem>_profile.json`.
    pub fn new(output_dir: PathBuf, output_name: Option<String>) -> Self {
        Self {
            output_dir,
            output_name,
        }
    }

    /// Write the document as pretty JSON, creating the output directory if
    /// needed. Returns the path of the written file.
    pub fn write_report(&self, document: &ProfileDocument, input_stem: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let name = self
            .output_name
            .clone()
            .unwrap_or_else(|| format!("{input_stem}_profile"));
        let path = self.output_dir.join(format!("{name}.json"));

        let json = serde_json::to_string_pretty(document)?;
        let mut file = File::create(&path)?;
        file.write_all(json.as_bytes())?;

        debug!(path = %path.display(), "profile report written");

        Ok(path)
    }
}
