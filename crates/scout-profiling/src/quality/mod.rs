//! Data quality metrics module.
//!
//! This module provides missing-value accounting, exact-duplicate-row
//! detection, and the composite quality score derived from both plus the
//! outlier totals.

mod analyzer;

pub use analyzer::QualityAnalyzer;
