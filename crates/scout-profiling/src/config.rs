//! Configuration types for the analysis engine.
//!
//! This module provides configuration options using the builder pattern.
//! Every tunable the statistical components rely on (bin count, IQR
//! multiplier, sample size, quality-score weights, size ceiling) lives here
//! so tests can vary them instead of reaching for magic numbers.

use serde::{Deserialize, Serialize};

/// Number of leading non-empty values sampled for type inference.
pub const DEFAULT_TYPE_SAMPLE_SIZE: usize = 100;

/// Number of histogram bins for numeric distributions.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// IQR multiplier for outlier bounds.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Quality-score penalty weight applied to the missing-value percentage.
pub const DEFAULT_MISSING_WEIGHT: f64 = 0.5;

/// Quality-score penalty weight applied to the duplicate-row percentage.
pub const DEFAULT_DUPLICATE_WEIGHT: f64 = 0.3;

/// Quality-score penalty weight applied to the outliers-per-row ratio.
pub const DEFAULT_OUTLIER_WEIGHT: f64 = 10.0;

/// Maximum raw input size accepted by the parser (50 MB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 50 * 1024 * 1024;

/// Configuration for a dataset analysis run.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```
/// use scout_profiling::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .histogram_bins(10)
///     .iqr_multiplier(3.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.histogram_bins, 10);
/// assert_eq!(config.type_sample_size, 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of leading non-empty values sampled per column for type
    /// inference. Default: 100
    pub type_sample_size: usize,

    /// Number of fixed-width bins for numeric histograms.
    /// Default: 20
    pub histogram_bins: usize,

    /// Multiplier applied to the IQR when computing outlier bounds
    /// (`Q1 - k*IQR`, `Q3 + k*IQR`). Default: 1.5
    pub iqr_multiplier: f64,

    /// Quality-score penalty per point of missing-value percentage.
    /// Default: 0.5
    pub missing_weight: f64,

    /// Quality-score penalty per point of duplicate-row percentage.
    /// Default: 0.3
    pub duplicate_weight: f64,

    /// Quality-score penalty applied to the total-outliers-per-row ratio.
    /// Default: 10.0
    pub outlier_weight: f64,

    /// Maximum raw input size in bytes accepted by the parser.
    /// Default: 50 MB
    pub max_input_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            type_sample_size: DEFAULT_TYPE_SAMPLE_SIZE,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            missing_weight: DEFAULT_MISSING_WEIGHT,
            duplicate_weight: DEFAULT_DUPLICATE_WEIGHT,
            outlier_weight: DEFAULT_OUTLIER_WEIGHT,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.type_sample_size == 0 {
            return Err(ConfigValidationError::InvalidSampleSize(
                self.type_sample_size,
            ));
        }

        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidBinCount(self.histogram_bins));
        }

        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        for (field, value) in [
            ("missing_weight", self.missing_weight),
            ("duplicate_weight", self.duplicate_weight),
            ("outlier_weight", self.outlier_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::InvalidWeight {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.max_input_bytes == 0 {
            return Err(ConfigValidationError::InvalidSizeLimit(
                self.max_input_bytes,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid type sample size: {0} (must be at least 1)")]
    InvalidSampleSize(usize),

    #[error("Invalid histogram bin count: {0} (must be at least 1)")]
    InvalidBinCount(usize),

    #[error("Invalid IQR multiplier: {0} (must be finite and greater than 0)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid weight for '{field}': {value} (must be finite and non-negative)")]
    InvalidWeight { field: String, value: f64 },

    #[error("Invalid input size limit: {0} bytes (must be at least 1)")]
    InvalidSizeLimit(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    type_sample_size: Option<usize>,
    histogram_bins: Option<usize>,
    iqr_multiplier: Option<f64>,
    missing_weight: Option<f64>,
    duplicate_weight: Option<f64>,
    outlier_weight: Option<f64>,
    max_input_bytes: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the number of leading non-empty values sampled for type inference.
    pub fn type_sample_size(mut self, size: usize) -> Self {
        self.type_sample_size = Some(size);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the IQR multiplier for outlier bounds.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the quality-score weight for the missing-value percentage.
    pub fn missing_weight(mut self, weight: f64) -> Self {
        self.missing_weight = Some(weight);
        self
    }

    /// Set the quality-score weight for the duplicate-row percentage.
    pub fn duplicate_weight(mut self, weight: f64) -> Self {
        self.duplicate_weight = Some(weight);
        self
    }

    /// Set the quality-score weight for the outliers-per-row ratio.
    pub fn outlier_weight(mut self, weight: f64) -> Self {
        self.outlier_weight = Some(weight);
        self
    }

    /// Set the maximum raw input size in bytes.
    pub fn max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let config = AnalysisConfig {
            type_sample_size: self.type_sample_size.unwrap_or(DEFAULT_TYPE_SAMPLE_SIZE),
            histogram_bins: self.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(DEFAULT_IQR_MULTIPLIER),
            missing_weight: self.missing_weight.unwrap_or(DEFAULT_MISSING_WEIGHT),
            duplicate_weight: self.duplicate_weight.unwrap_or(DEFAULT_DUPLICATE_WEIGHT),
            outlier_weight: self.outlier_weight.unwrap_or(DEFAULT_OUTLIER_WEIGHT),
            max_input_bytes: self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.type_sample_size, 100);
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.iqr_multiplier, 1.5);
        assert_eq!(config.missing_weight, 0.5);
        assert_eq!(config.duplicate_weight, 0.3);
        assert_eq!(config.outlier_weight, 10.0);
        assert_eq!(config.max_input_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_builder_defaults() {
        let config = AnalysisConfig::builder().build().unwrap();
        assert_eq!(config.histogram_bins, DEFAULT_HISTOGRAM_BINS);
        assert_eq!(config.iqr_multiplier, DEFAULT_IQR_MULTIPLIER);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AnalysisConfig::builder()
            .type_sample_size(50)
            .histogram_bins(10)
            .iqr_multiplier(3.0)
            .max_input_bytes(1024)
            .build()
            .unwrap();

        assert_eq!(config.type_sample_size, 50);
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.iqr_multiplier, 3.0);
        assert_eq!(config.max_input_bytes, 1024);
    }

    #[test]
    fn test_validation_zero_bins() {
        let result = AnalysisConfig::builder().histogram_bins(0).build();

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidBinCount(0)
        ));
    }

    #[test]
    fn test_validation_zero_sample_size() {
        let result = AnalysisConfig::builder().type_sample_size(0).build();

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidSampleSize(0)
        ));
    }

    #[test]
    fn test_validation_negative_multiplier() {
        let result = AnalysisConfig::builder().iqr_multiplier(-1.5).build();

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidIqrMultiplier(_)
        ));
    }

    #[test]
    fn test_validation_negative_weight() {
        let result = AnalysisConfig::builder().duplicate_weight(-0.1).build();

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn test_validation_nan_weight() {
        let result = AnalysisConfig::builder().missing_weight(f64::NAN).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AnalysisConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.histogram_bins, deserialized.histogram_bins);
        assert_eq!(config.iqr_multiplier, deserialized.iqr_multiplier);
        assert_eq!(config.max_input_bytes, deserialized.max_input_bytes);
    }
}
