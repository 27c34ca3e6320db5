//! Tabular dataset value types.
//!
//! A [`Dataset`] is an ordered header plus equal-width rows of raw string
//! cells. It is the single record-construction contract in the engine: the
//! delimited parser produces one, and collaborators that decode other
//! container formats (e.g. binary spreadsheets) feed their decoded rows
//! through [`Dataset::from_rows`] to obtain the same structure.
//!
//! Cells are plain strings at this boundary; typed interpretation (numeric,
//! date) happens downstream via explicit, fallible parsing. Datasets are
//! immutable after construction.

use serde::{Deserialize, Serialize};

/// An ordered collection of records sharing one header.
///
/// Invariant: every row has exactly `columns.len()` cells. Rows shorter
/// than the header are padded with empty strings at construction; extra
/// trailing cells are truncated.
///
/// ```
/// use scout_profiling::dataset::Dataset;
///
/// let dataset = Dataset::from_rows(
///     vec!["name".to_string(), "age".to_string()],
///     vec![vec!["Alice".to_string(), "34".to_string()],
///          vec!["Bob".to_string()]],
/// );
///
/// assert_eq!(dataset.row_count(), 2);
/// // short row padded to header width
/// assert_eq!(dataset.row(1).unwrap(), ["Bob".to_string(), String::new()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from a header and raw rows, normalizing every row
    /// to the header width (short rows padded with empty strings, extra
    /// cells dropped).
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize_with(width, String::new);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the header.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All rows in original input order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row by 0-based index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterator over one column's cells in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Ordered (column name, cell value) view of one row.
    pub fn record(&self, index: usize) -> Option<impl Iterator<Item = (&str, &str)>> {
        self.rows.get(index).map(|row| {
            self.columns
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.as_str(), value.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_rows(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                vec!["1".to_string(), "x".to_string(), "p".to_string()],
                vec!["2".to_string(), "y".to_string(), "q".to_string()],
            ],
        )
    }

    #[test]
    fn test_counts() {
        let dataset = sample();
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.column_count(), 3);
    }

    #[test]
    fn test_short_rows_padded() {
        let dataset = Dataset::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert_eq!(dataset.row(0).unwrap(), ["1".to_string(), String::new()]);
    }

    #[test]
    fn test_long_rows_truncated() {
        let dataset = Dataset::from_rows(
            vec!["a".to_string()],
            vec![vec!["1".to_string(), "extra".to_string()]],
        );
        assert_eq!(dataset.row(0).unwrap(), ["1".to_string()]);
    }

    #[test]
    fn test_column_values_in_row_order() {
        let dataset = sample();
        let values: Vec<&str> = dataset.column_values(1).collect();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn test_column_index() {
        let dataset = sample();
        assert_eq!(dataset.column_index("b"), Some(1));
        assert_eq!(dataset.column_index("missing"), None);
    }

    #[test]
    fn test_record_preserves_header_order() {
        let dataset = sample();
        let record: Vec<(&str, &str)> = dataset.record(0).unwrap().collect();
        assert_eq!(record, vec![("a", "1"), ("b", "x"), ("c", "p")]);
    }

    #[test]
    fn test_record_out_of_range() {
        let dataset = sample();
        assert!(dataset.record(5).is_none());
    }
}
