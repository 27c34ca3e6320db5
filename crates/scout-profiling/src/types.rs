//! Report value types produced by the analysis engine.
//!
//! Everything here is a plain serializable data value with no behavior,
//! suitable for handing to a rendering or export collaborator. A fresh
//! [`AnalysisReport`] is derived per analysis run and fully replaces any
//! previous one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification of a column, derived once from a bounded prefix sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Numeric,
    Datetime,
    Categorical,
}

impl ColumnType {
    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Datetime => "datetime",
            Self::Categorical => "categorical",
        }
    }
}

/// Dataset-level summary figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Total missing cells across all rows and columns.
    pub missing_total: usize,
    /// Missing cells as a percentage of all cells (0 for an empty grid).
    pub missing_percentage: f64,
    /// Inferred type per column name.
    pub column_types: HashMap<String, ColumnType>,
}

/// Exact-duplicate-row accounting.
///
/// A row is flagged iff an earlier row has the identical ordered field
/// mapping; the first occurrence of any value set is never flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// 0-based indices of flagged rows, ascending.
    pub row_indices: Vec<usize>,
    /// Number of flagged rows.
    pub count: usize,
    /// Flagged rows as a percentage of all rows.
    pub percentage: f64,
}

/// Per-column outlier flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Flagged row indices per column. Columns with zero outliers are
    /// omitted entirely.
    pub by_column: HashMap<String, Vec<usize>>,
    /// Sum of flags across all columns; a row flagged in two columns
    /// counts twice.
    pub total_count: usize,
    /// Names of columns with at least one outlier, in header order.
    pub affected_columns: Vec<String>,
}

/// Summary statistics over a column's parseable numeric values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Distribution summary of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    /// Fixed-bin histogram over a column's numeric values.
    Histogram {
        /// Count per bin; fixed length equal to the configured bin count.
        counts: Vec<usize>,
        /// Range label per bin, formatted `"{lower} - {upper}"` with two
        /// decimal places.
        labels: Vec<String>,
    },
    /// Value-frequency table over a column's non-empty values.
    Categorical {
        /// Distinct values in first-appearance order.
        values: Vec<String>,
        /// Occurrence count parallel to `values`.
        counts: Vec<usize>,
    },
}

impl Distribution {
    /// Whether this distribution is a histogram.
    pub fn is_histogram(&self) -> bool {
        matches!(self, Self::Histogram { .. })
    }
}

/// Per-column analysis results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureAnalysis {
    /// Column name.
    pub name: String,
    /// Inferred column type.
    pub column_type: ColumnType,
    /// Number of distinct non-empty raw values.
    pub unique_count: usize,
    /// Number of missing cells.
    pub null_count: usize,
    /// Numeric summary, present when the column has at least one
    /// parseable numeric value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_stats: Option<NumericStats>,
    /// Histogram or value-frequency distribution.
    pub distribution: Distribution,
}

/// The complete, immutable output of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dataset-level summary.
    pub summary: DatasetSummary,
    /// Composite quality score in [0, 100].
    pub quality_score: f64,
    /// Duplicate-row accounting.
    pub duplicates: DuplicateReport,
    /// Per-column outlier flags.
    pub outliers: OutlierReport,
    /// Per-column feature analysis, in header order.
    pub features: Vec<FeatureAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ColumnType::Numeric).unwrap(),
            "\"numeric\""
        );
        assert_eq!(
            serde_json::to_string(&ColumnType::Datetime).unwrap(),
            "\"datetime\""
        );
        assert_eq!(
            serde_json::to_string(&ColumnType::Categorical).unwrap(),
            "\"categorical\""
        );
    }

    #[test]
    fn test_column_type_name() {
        assert_eq!(ColumnType::Numeric.name(), "numeric");
        assert_eq!(ColumnType::Categorical.name(), "categorical");
    }

    #[test]
    fn test_distribution_tagged_serialization() {
        let histogram = Distribution::Histogram {
            counts: vec![2, 1],
            labels: vec!["0.00 - 1.00".to_string(), "1.00 - 2.00".to_string()],
        };
        let json = serde_json::to_string(&histogram).unwrap();
        assert!(json.contains("\"kind\":\"histogram\""));

        let frequency = Distribution::Categorical {
            values: vec!["red".to_string()],
            counts: vec![3],
        };
        let json = serde_json::to_string(&frequency).unwrap();
        assert!(json.contains("\"kind\":\"categorical\""));
    }

    #[test]
    fn test_distribution_is_histogram() {
        let histogram = Distribution::Histogram {
            counts: vec![],
            labels: vec![],
        };
        assert!(histogram.is_histogram());

        let frequency = Distribution::Categorical {
            values: vec![],
            counts: vec![],
        };
        assert!(!frequency.is_histogram());
    }

    #[test]
    fn test_feature_analysis_skips_absent_stats() {
        let feature = FeatureAnalysis {
            name: "color".to_string(),
            column_type: ColumnType::Categorical,
            unique_count: 3,
            null_count: 0,
            numeric_stats: None,
            distribution: Distribution::Categorical {
                values: vec!["red".to_string()],
                counts: vec![1],
            },
        };

        let json = serde_json::to_string(&feature).unwrap();
        assert!(!json.contains("numeric_stats"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = AnalysisReport {
            summary: DatasetSummary {
                row_count: 2,
                column_count: 1,
                missing_total: 0,
                missing_percentage: 0.0,
                column_types: HashMap::from([("v".to_string(), ColumnType::Numeric)]),
            },
            quality_score: 100.0,
            duplicates: DuplicateReport {
                row_indices: vec![],
                count: 0,
                percentage: 0.0,
            },
            outliers: OutlierReport::default(),
            features: vec![],
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.summary.row_count, 2);
        assert_eq!(deserialized.quality_score, 100.0);
        assert_eq!(
            deserialized.summary.column_types.get("v"),
            Some(&ColumnType::Numeric)
        );
    }
}
