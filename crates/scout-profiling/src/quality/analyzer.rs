//! Missing-value, duplicate-row, and quality-score computation.

use crate::config::AnalysisConfig;
use crate::dataset::Dataset;
use crate::types::DuplicateReport;
use crate::utils::is_missing;
use std::collections::HashSet;
use tracing::debug;

/// Computes dataset-level quality metrics.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Count missing cells across the whole dataset.
    ///
    /// Returns `(total, percentage)`. The percentage is defined as 0.0 when
    /// the dataset has no cells, so an empty grid never divides by zero.
    pub fn missing_cells(dataset: &Dataset) -> (usize, f64) {
        let total: usize = dataset
            .rows()
            .iter()
            .map(|row| row.iter().filter(|cell| is_missing(cell)).count())
            .sum();

        let cell_count = dataset.row_count() * dataset.column_count();
        let percentage = if cell_count > 0 {
            (total as f64 / cell_count as f64) * 100.0
        } else {
            0.0
        };

        (total, percentage)
    }

    /// Find exact-duplicate rows.
    ///
    /// Row N is flagged iff an earlier row carries the identical ordered
    /// cell vector; the first occurrence of any value set is never flagged.
    /// All rows share the header by the dataset invariant, so structural
    /// record equality reduces to cell-vector equality.
    pub fn find_duplicates(dataset: &Dataset) -> DuplicateReport {
        let mut seen: HashSet<&[String]> = HashSet::with_capacity(dataset.row_count());
        let mut row_indices = Vec::new();

        for (index, row) in dataset.rows().iter().enumerate() {
            if !seen.insert(row.as_slice()) {
                row_indices.push(index);
            }
        }

        let count = row_indices.len();
        let percentage = if dataset.row_count() > 0 {
            (count as f64 / dataset.row_count() as f64) * 100.0
        } else {
            0.0
        };

        debug!(count, "duplicate rows flagged");

        DuplicateReport {
            row_indices,
            count,
            percentage,
        }
    }

    /// Compute the composite quality score.
    ///
    /// Starts at 100 and subtracts `missing% * missing_weight`,
    /// `duplicate% * duplicate_weight`, and
    /// `(total_outliers / row_count) * outlier_weight`, clamped to
    /// [0, 100]. A heuristic composite, not a calibrated metric; the
    /// default weights are part of the output contract.
    pub fn quality_score(
        config: &AnalysisConfig,
        missing_percentage: f64,
        duplicate_percentage: f64,
        total_outliers: usize,
        row_count: usize,
    ) -> f64 {
        let outlier_penalty = if row_count > 0 {
            (total_outliers as f64 / row_count as f64) * config.outlier_weight
        } else {
            0.0
        };

        let score = 100.0
            - missing_percentage * config.missing_weight
            - duplicate_percentage * config.duplicate_weight
            - outlier_penalty;

        score.clamp(0.0, 100.0)
    }
}
