//! IQR-based outlier detection.
//!
//! The detector runs per column over every column with at least one
//! finite-parseable value, independent of the inferred column type: a
//! mostly-categorical column with a few numbers still gets its numeric
//! cells examined. Non-numeric and missing cells are excluded from
//! consideration entirely; their rows are neither outliers nor
//! non-outliers for that column.

use crate::config::AnalysisConfig;
use crate::dataset::Dataset;
use crate::profiler::statistics::interpolated_quantile;
use crate::types::OutlierReport;
use crate::utils::parse_numeric;
use std::collections::HashMap;
use tracing::debug;

/// Detects anomalous rows per numeric-capable column using the
/// interquartile-range rule.
#[derive(Debug, Clone)]
pub struct OutlierDetector {
    iqr_multiplier: f64,
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl OutlierDetector {
    /// Create a detector with an explicit IQR multiplier.
    pub fn new(iqr_multiplier: f64) -> Self {
        Self { iqr_multiplier }
    }

    /// Create a detector from an analysis configuration.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.iqr_multiplier)
    }

    /// Flag outlier rows per column.
    ///
    /// Q1 and Q3 are linear-interpolation quantiles over the sorted numeric
    /// values; the bounds are `[Q1 - k*IQR, Q3 + k*IQR]` and a row is an
    /// outlier iff its parsed value lies strictly outside them. Columns
    /// with zero outliers are omitted from the map. `total_count` sums
    /// across all flagged columns, so one row flagged in two columns
    /// counts twice.
    pub fn detect(&self, dataset: &Dataset) -> OutlierReport {
        let mut by_column = HashMap::new();
        let mut affected_columns = Vec::new();
        let mut total_count = 0;

        for (column_index, name) in dataset.columns().iter().enumerate() {
            let parsed: Vec<(usize, f64)> = dataset
                .column_values(column_index)
                .enumerate()
                .filter_map(|(row, cell)| parse_numeric(cell).map(|value| (row, value)))
                .collect();

            if parsed.is_empty() {
                continue;
            }

            let mut sorted: Vec<f64> = parsed.iter().map(|&(_, value)| value).collect();
            sorted.sort_by(f64::total_cmp);

            let (Some(q1), Some(q3)) = (
                interpolated_quantile(&sorted, 0.25),
                interpolated_quantile(&sorted, 0.75),
            ) else {
                continue;
            };

            let iqr = q3 - q1;
            let lower_bound = q1 - self.iqr_multiplier * iqr;
            let upper_bound = q3 + self.iqr_multiplier * iqr;

            let flagged: Vec<usize> = parsed
                .iter()
                .filter(|&&(_, value)| value < lower_bound || value > upper_bound)
                .map(|&(row, _)| row)
                .collect();

            if flagged.is_empty() {
                continue;
            }

            debug!(
                column = name.as_str(),
                count = flagged.len(),
                lower_bound,
                upper_bound,
                "outliers flagged"
            );

            total_count += flagged.len();
            affected_columns.push(name.clone());
            by_column.insert(name.clone(), flagged);
        }

        OutlierReport {
            by_column,
            total_count,
            affected_columns,
        }
    }
}
