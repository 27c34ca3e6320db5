//! Delimited-text parsing into [`Dataset`] records.
//!
//! The parser turns raw text into an ordered sequence of header-keyed
//! records. Fields are split on a single-character delimiter with a
//! double-quote toggle: a `"` flips the in-quotes state, the delimiter
//! inside quotes is literal text, and quote characters themselves are
//! dropped. Every produced field is whitespace-trimmed.
//!
//! These are deliberately simple-trimming semantics, not full RFC 4180
//! quote escaping (`""` inside a quoted field is not unescaped). Row-width
//! mismatches are tolerated as an explicit leniency policy: short rows are
//! padded with empty strings, extra fields beyond the header are dropped.
//!
//! Binary spreadsheet formats are not decoded here. A decoding collaborator
//! is expected to produce header + rows and feed them through
//! [`Dataset::from_rows`], the same record-construction contract this
//! parser uses.
//!
//! # Example
//!
//! ```
//! use scout_profiling::parser::DelimitedParser;
//!
//! let csv = "name,note\nAlice,\"likes a, b\"\nBob,ok\n";
//! let dataset = DelimitedParser::default().parse_str(csv).unwrap();
//!
//! assert_eq!(dataset.row_count(), 2);
//! assert_eq!(dataset.row(0).unwrap()[1], "likes a, b");
//! ```

use crate::config::{AnalysisConfig, DEFAULT_MAX_INPUT_BYTES};
use crate::dataset::Dataset;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declared or detected input format, dispatched from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Tsv,
    Xlsx,
    Xls,
}

impl InputFormat {
    /// Resolve a format from a file extension (case-insensitive, with or
    /// without a leading dot).
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension
            .trim_start_matches('.')
            .to_ascii_lowercase()
            .as_str()
        {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Field delimiter for delimited-text formats, `None` for binary
    /// spreadsheet containers.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            Self::Csv => Some(','),
            Self::Tsv => Some('\t'),
            Self::Xlsx | Self::Xls => None,
        }
    }

    /// Display name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

/// Parser for delimited text with a single-character field delimiter.
#[derive(Debug, Clone)]
pub struct DelimitedParser {
    delimiter: char,
    max_input_bytes: usize,
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self::new(',')
    }
}

impl DelimitedParser {
    /// Create a parser with the given field delimiter and the default
    /// input size ceiling.
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Set the maximum accepted raw input size in bytes.
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    /// Parse raw text into a [`Dataset`].
    ///
    /// The first line is the header; its delimiter-split, trimmed fields
    /// become column names in order. Each subsequent non-blank line becomes
    /// one record. Input row order is preserved exactly and data rows are
    /// 0-indexed from the first data line.
    pub fn parse_str(&self, input: &str) -> Result<Dataset> {
        if input.len() > self.max_input_bytes {
            return Err(AnalysisError::SizeLimitExceeded {
                actual: input.len(),
                limit: self.max_input_bytes,
            });
        }

        // Strip BOM if present
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);

        // Whitespace-only lines are skipped so a trailing newline does not
        // fabricate a phantom all-empty record.
        let mut lines = input.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines.next().ok_or(AnalysisError::EmptyInput)?;
        let columns: Vec<String> = header_line
            .split(self.delimiter)
            .map(|field| field.trim().to_string())
            .collect();

        let rows: Vec<Vec<String>> = lines.map(|line| self.split_line(line)).collect();

        debug!(
            rows = rows.len(),
            columns = columns.len(),
            "parsed delimited input"
        );

        Ok(Dataset::from_rows(columns, rows))
    }

    /// Split one data line into trimmed fields, honoring double-quoted
    /// spans. Quote characters toggle the in-quotes state and are dropped
    /// from the output.
    fn split_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in line.chars() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == self.delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(c);
            }
        }
        fields.push(current.trim().to_string());

        fields
    }
}

/// Parse raw input in the given format under the configured size ceiling.
///
/// Only delimited-text formats are decoded by the engine. Binary
/// spreadsheet formats fail with [`AnalysisError::UnsupportedFormat`]; a
/// decoding collaborator must turn them into rows and load them via
/// [`Dataset::from_rows`].
pub fn parse_input(input: &str, format: InputFormat, config: &AnalysisConfig) -> Result<Dataset> {
    match format.delimiter() {
        Some(delimiter) => DelimitedParser::new(delimiter)
            .with_max_input_bytes(config.max_input_bytes)
            .parse_str(input),
        None => Err(AnalysisError::UnsupportedFormat(format!(
            "{} (binary spreadsheet input must be decoded to rows externally and loaded via Dataset::from_rows)",
            format.name()
        ))),
    }
}
