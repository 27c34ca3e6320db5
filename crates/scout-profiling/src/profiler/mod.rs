//! Dataset analysis orchestration.
//!
//! This module runs the statistical components in a fixed order over a
//! loaded [`Dataset`] and assembles the final [`AnalysisReport`]:
//! summary inputs → missing values → duplicates → outliers → quality score
//! → per-column feature analysis. Analysis is a pure function of the
//! configuration and the dataset; no state survives between calls.

pub(crate) mod statistics;
pub mod type_inference;

pub use statistics::numeric_summary;
pub use type_inference::{infer_column_type, is_date_like};

use crate::config::AnalysisConfig;
use crate::dataset::Dataset;
use crate::distribution::build_distribution;
use crate::error::{AnalysisError, Result};
use crate::outliers::OutlierDetector;
use crate::quality::QualityAnalyzer;
use crate::types::{AnalysisReport, DatasetSummary, FeatureAnalysis};
use crate::utils::{is_missing, parse_numeric};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Analyzer producing a full [`AnalysisReport`] for one dataset.
///
/// # Example
///
/// ```
/// use scout_profiling::parser::DelimitedParser;
/// use scout_profiling::profiler::DatasetAnalyzer;
///
/// let csv = "name,score\nAlice,10\nBob,12\n";
/// let dataset = DelimitedParser::default().parse_str(csv).unwrap();
/// let report = DatasetAnalyzer::default().analyze(&dataset).unwrap();
///
/// assert_eq!(report.summary.row_count, 2);
/// assert_eq!(report.summary.column_count, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetAnalyzer {
    config: AnalysisConfig,
}

impl DatasetAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full analysis over a dataset.
    ///
    /// Fails with [`AnalysisError::EmptyDataset`] when the dataset has zero
    /// data rows. Otherwise a complete report is produced; malformed cells
    /// degrade to non-numeric/non-date classification rather than aborting
    /// the run.
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        if dataset.row_count() == 0 {
            return Err(AnalysisError::EmptyDataset);
        }

        debug!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "starting dataset analysis"
        );

        let (missing_total, missing_percentage) = QualityAnalyzer::missing_cells(dataset);
        let duplicates = QualityAnalyzer::find_duplicates(dataset);
        let outliers = OutlierDetector::from_config(&self.config).detect(dataset);
        let quality_score = QualityAnalyzer::quality_score(
            &self.config,
            missing_percentage,
            duplicates.percentage,
            outliers.total_count,
            dataset.row_count(),
        );

        let mut column_types = HashMap::with_capacity(dataset.column_count());
        let mut features = Vec::with_capacity(dataset.column_count());

        for (index, name) in dataset.columns().iter().enumerate() {
            let cells: Vec<&str> = dataset.column_values(index).collect();

            let column_type = infer_column_type(cells.iter().copied(), self.config.type_sample_size);
            column_types.insert(name.clone(), column_type);

            let null_count = cells.iter().filter(|cell| is_missing(cell)).count();
            let unique_count = cells
                .iter()
                .filter(|cell| !is_missing(cell))
                .collect::<HashSet<_>>()
                .len();

            let numeric: Vec<f64> = cells.iter().filter_map(|cell| parse_numeric(cell)).collect();
            let numeric_stats = numeric_summary(&numeric);
            let distribution = build_distribution(&cells, self.config.histogram_bins);

            features.push(FeatureAnalysis {
                name: name.clone(),
                column_type,
                unique_count,
                null_count,
                numeric_stats,
                distribution,
            });
        }

        debug!(quality_score, "dataset analysis complete");

        Ok(AnalysisReport {
            summary: DatasetSummary {
                row_count: dataset.row_count(),
                column_count: dataset.column_count(),
                missing_total,
                missing_percentage,
                column_types,
            },
            quality_score,
            duplicates,
            outliers,
            features,
        })
    }
}

/// Analyze a dataset with the default configuration.
pub fn analyze_dataset(dataset: &Dataset) -> Result<AnalysisReport> {
    DatasetAnalyzer::default().analyze(dataset)
}
