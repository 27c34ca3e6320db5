//! Numeric summary statistics for column analysis.

use crate::types::NumericStats;

/// Linear-interpolation quantile over pre-sorted values.
///
/// The interpolated rank is `(n - 1) * q`; the two bracketing sorted values
/// are blended by the fractional part of the rank. When the upper bracket
/// falls out of range the lower value is returned.
pub(crate) fn interpolated_quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = (sorted.len() - 1) as f64 * q;
    let lower = rank.floor() as usize;
    let upper = lower + 1;
    let fraction = rank - lower as f64;

    let base = sorted[lower.min(sorted.len() - 1)];
    if upper >= sorted.len() || fraction == 0.0 {
        Some(base)
    } else {
        Some(base + (sorted[upper] - base) * fraction)
    }
}

/// Arithmetic mean. 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). 0.0 for n <= 1.
pub(crate) fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    variance.sqrt()
}

/// Summarize a column's parseable numeric values.
///
/// Returns `None` when the column has no numeric values; the same gate the
/// histogram builder uses.
pub fn numeric_summary(values: &[f64]) -> Option<NumericStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let median = interpolated_quantile(&sorted, 0.5).unwrap_or(min);

    Some(NumericStats {
        min,
        max,
        mean: mean(values),
        median,
        std_dev: sample_std_dev(values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== interpolated_quantile tests ====================

    #[test]
    fn test_quantile_empty() {
        assert_eq!(interpolated_quantile(&[], 0.5), None);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(interpolated_quantile(&[5.0], 0.25), Some(5.0));
        assert_eq!(interpolated_quantile(&[5.0], 1.0), Some(5.0));
    }

    #[test]
    fn test_quantile_endpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(interpolated_quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(interpolated_quantile(&sorted, 1.0), Some(4.0));
    }

    #[test]
    fn test_quantile_interpolates() {
        // rank = 5 * 0.25 = 1.25 -> 2 + 0.25 * (3 - 2) = 2.25
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let q1 = interpolated_quantile(&sorted, 0.25).unwrap();
        assert!((q1 - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_quantile_median_even_count() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        let median = interpolated_quantile(&sorted, 0.5).unwrap();
        assert!((median - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_quantile_median_odd_count() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(interpolated_quantile(&sorted, 0.5), Some(2.0));
    }

    // ==================== mean / std-dev tests ====================

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_std_dev_basic() {
        // Variance of 1..5 with n-1 denominator = 2.5
        let std = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((std - 2.5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_sample_std_dev_single_value() {
        assert_eq!(sample_std_dev(&[7.0]), 0.0);
    }

    #[test]
    fn test_sample_std_dev_identical_values() {
        assert_eq!(sample_std_dev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    // ==================== numeric_summary tests ====================

    #[test]
    fn test_numeric_summary_basic() {
        let stats = numeric_summary(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.mean, 30.0);
        assert_eq!(stats.median, 30.0);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_numeric_summary_unsorted_input() {
        let stats = numeric_summary(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_numeric_summary_empty() {
        assert!(numeric_summary(&[]).is_none());
    }
}
