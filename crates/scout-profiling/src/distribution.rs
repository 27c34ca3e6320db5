//! Distribution summaries: fixed-bin histograms and value-frequency tables.
//!
//! A column with at least one parseable numeric value gets a fixed-bin
//! histogram spanning `[min, max]` of its numeric values; everything else
//! gets a frequency table of its distinct non-empty raw values in
//! first-appearance order.

use crate::types::Distribution;
use crate::utils::{is_missing, parse_numeric};
use std::collections::HashMap;

/// Build the distribution summary for one column's raw cells.
///
/// ```
/// use scout_profiling::distribution::build_distribution;
/// use scout_profiling::types::Distribution;
///
/// let dist = build_distribution(&["red", "blue", "red"], 20);
/// match dist {
///     Distribution::Categorical { values, counts } => {
///         assert_eq!(values, vec!["red".to_string(), "blue".to_string()]);
///         assert_eq!(counts, vec![2, 1]);
///     }
///     _ => panic!("expected a frequency table"),
/// }
/// ```
pub fn build_distribution(values: &[&str], bins: usize) -> Distribution {
    let numeric: Vec<f64> = values.iter().filter_map(|cell| parse_numeric(cell)).collect();

    if numeric.is_empty() {
        build_frequency_table(values)
    } else {
        build_histogram(&numeric, bins)
    }
}

/// Build a fixed-bin histogram over numeric values.
///
/// `width = (max - min) / bins`; a value's bin is
/// `floor((value - min) / width)` clamped to the last bin, which places the
/// value exactly equal to `max` in the final bin rather than out of range.
/// When all values are equal (`width == 0`) every value lands in bin 0.
pub fn build_histogram(values: &[f64], bins: usize) -> Distribution {
    debug_assert!(bins > 0, "bin count must be validated upstream");
    debug_assert!(!values.is_empty(), "histogram needs at least one value");

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = if width == 0.0 {
            0
        } else {
            (((value - min) / width).floor() as usize).min(bins - 1)
        };
        counts[index] += 1;
    }

    let labels = (0..bins)
        .map(|bin| {
            let lower = min + bin as f64 * width;
            let upper = min + (bin + 1) as f64 * width;
            format!("{lower:.2} - {upper:.2}")
        })
        .collect();

    Distribution::Histogram { counts, labels }
}

/// Build a frequency table of distinct non-empty values in first-appearance
/// order.
pub fn build_frequency_table(values: &[&str]) -> Distribution {
    let mut distinct: Vec<String> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for &value in values {
        if is_missing(value) {
            continue;
        }
        match positions.get(value) {
            Some(&position) => counts[position] += 1,
            None => {
                positions.insert(value, distinct.len());
                distinct.push(value.to_string());
                counts.push(1);
            }
        }
    }

    Distribution::Categorical {
        values: distinct,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_parts(dist: Distribution) -> (Vec<usize>, Vec<String>) {
        match dist {
            Distribution::Histogram { counts, labels } => (counts, labels),
            _ => panic!("expected a histogram"),
        }
    }

    fn frequency_parts(dist: Distribution) -> (Vec<String>, Vec<usize>) {
        match dist {
            Distribution::Categorical { values, counts } => (values, counts),
            _ => panic!("expected a frequency table"),
        }
    }

    // ==================== histogram tests ====================

    #[test]
    fn test_histogram_counts_sum_to_value_count() {
        let values: Vec<f64> = (0..100).map(|v| v as f64).collect();
        let (counts, labels) = histogram_parts(build_histogram(&values, 20));

        assert_eq!(counts.len(), 20);
        assert_eq!(labels.len(), 20);
        assert_eq!(counts.iter().sum::<usize>(), 100);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let values = [0.0, 5.0, 10.0];
        let (counts, _) = histogram_parts(build_histogram(&values, 20));

        // 10.0 maps to index 20, clamped to 19.
        assert_eq!(counts[19], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_all_equal_values_single_bin() {
        let values = [7.0, 7.0, 7.0];
        let (counts, labels) = histogram_parts(build_histogram(&values, 20));

        assert_eq!(counts[0], 3);
        assert_eq!(counts.iter().skip(1).sum::<usize>(), 0);
        assert_eq!(labels[0], "7.00 - 7.00");
    }

    #[test]
    fn test_histogram_labels_two_decimal_ranges() {
        let values = [0.0, 10.0];
        let (_, labels) = histogram_parts(build_histogram(&values, 20));

        assert_eq!(labels[0], "0.00 - 0.50");
        assert_eq!(labels[19], "9.50 - 10.00");
    }

    #[test]
    fn test_histogram_custom_bin_count() {
        let values = [0.0, 1.0, 2.0, 3.0];
        let (counts, _) = histogram_parts(build_histogram(&values, 2));

        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn test_histogram_negative_range() {
        let values = [-10.0, -5.0, 0.0];
        let (counts, labels) = histogram_parts(build_histogram(&values, 20));

        assert_eq!(counts.iter().sum::<usize>(), 3);
        assert_eq!(labels[0], "-10.00 - -9.50");
    }

    // ==================== frequency table tests ====================

    #[test]
    fn test_frequency_first_appearance_order() {
        let (values, counts) =
            frequency_parts(build_frequency_table(&["blue", "red", "blue", "green"]));

        assert_eq!(values, vec!["blue", "red", "green"]);
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn test_frequency_skips_missing_cells() {
        let (values, counts) = frequency_parts(build_frequency_table(&["a", "", "a", "  "]));

        assert_eq!(values, vec!["a"]);
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn test_frequency_empty_column() {
        let (values, counts) = frequency_parts(build_frequency_table(&["", ""]));

        assert!(values.is_empty());
        assert!(counts.is_empty());
    }

    // ==================== build_distribution dispatch tests ====================

    #[test]
    fn test_distribution_numeric_column_gets_histogram() {
        let dist = build_distribution(&["1", "2", "3"], 20);
        assert!(dist.is_histogram());
    }

    #[test]
    fn test_distribution_single_numeric_value_gets_histogram() {
        // One parseable number among text is enough for the numeric path.
        let dist = build_distribution(&["red", "5", "blue"], 20);
        assert!(dist.is_histogram());

        let (counts, _) = histogram_parts(dist);
        assert_eq!(counts.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_distribution_text_column_gets_frequency() {
        let dist = build_distribution(&["red", "blue"], 20);
        assert!(!dist.is_histogram());
    }

    #[test]
    fn test_distribution_empty_column_gets_frequency() {
        let dist = build_distribution(&["", ""], 20);
        assert!(!dist.is_histogram());
    }
}
