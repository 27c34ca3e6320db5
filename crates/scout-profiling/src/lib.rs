//! Statistical Profiling Engine for Tabular Datasets
//!
//! This library turns raw delimited text (or externally decoded rows) into
//! a structured statistical profile:
//!
//! - **Parsing**: delimited text → ordered header-keyed records, with
//!   quoted-field handling and a documented leniency policy for row-width
//!   mismatches
//! - **Type Inference**: numeric / datetime / categorical classification
//!   from a bounded prefix sample per column
//! - **Quality Metrics**: missing-value accounting, exact-duplicate-row
//!   detection, and a composite [0, 100] quality score
//! - **Outlier Detection**: per-column interquartile-range rule with
//!   interpolated quantiles
//! - **Distributions**: fixed-bin histograms for numeric columns,
//!   value-frequency tables for everything else
//!
//! The engine is synchronous and holds no cross-call state: every analysis
//! run is a pure function of a configuration and a [`Dataset`], producing a
//! plain serializable [`AnalysisReport`] for rendering or export
//! collaborators. Run it off your UI thread for large inputs; there are no
//! internal suspension points.
//!
//! # Quick Start
//!
//! ```
//! use scout_profiling::parser::DelimitedParser;
//! use scout_profiling::profiler::DatasetAnalyzer;
//! use scout_profiling::types::ColumnType;
//!
//! let csv = "name,score,joined\nAlice,10,2021-01-01\nBob,12,2022-06-15\n";
//! let dataset = DelimitedParser::default().parse_str(csv).unwrap();
//! let report = DatasetAnalyzer::default().analyze(&dataset).unwrap();
//!
//! assert_eq!(report.summary.row_count, 2);
//! assert_eq!(report.summary.column_types["score"], ColumnType::Numeric);
//! assert_eq!(report.summary.column_types["joined"], ColumnType::Datetime);
//! assert_eq!(report.quality_score, 100.0);
//! ```

pub mod config;
pub mod dataset;
pub mod distribution;
pub mod error;
pub mod outliers;
pub mod parser;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use dataset::Dataset;
pub use distribution::build_distribution;
pub use error::{AnalysisError, Result};
pub use outliers::OutlierDetector;
pub use parser::{DelimitedParser, InputFormat, parse_input};
pub use profiler::{DatasetAnalyzer, analyze_dataset, infer_column_type};
pub use quality::QualityAnalyzer;
pub use reporting::{ProfileDocument, ProfileReportWriter};
pub use types::{
    AnalysisReport, ColumnType, DatasetSummary, Distribution, DuplicateReport, FeatureAnalysis,
    NumericStats, OutlierReport,
};
