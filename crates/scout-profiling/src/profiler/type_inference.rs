//! Column type inference from a bounded value sample.
//!
//! Classification is a column-level property, not per-cell: it is derived
//! once from the first N non-empty values in dataset row order (N
//! configurable, 100 by default), so inference is deterministic for a fixed
//! sample. The numeric check runs before the datetime check, so a purely
//! numeric column is never classified as datetime even when a date parser
//! would also accept it.

use crate::types::ColumnType;
use crate::utils::is_numeric;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// A date-like value must carry a 4-digit year somewhere.
static FOUR_DIGIT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}").expect("Invalid regex: 4-digit year"));

/// Calendar date formats accepted by the round-trip parse.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Datetime formats accepted by the round-trip parse.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Try to parse a value as a calendar date through the supported formats.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    None
}

/// Check if a value is date-like: contains a 4-digit year and round-trips
/// through a date parse.
pub fn is_date_like(value: &str) -> bool {
    FOUR_DIGIT_YEAR.is_match(value) && parse_date(value).is_some()
}

/// Infer a column's type from its raw cell values in row order.
///
/// Sample = first `sample_size` non-empty values (fewer if the column has
/// fewer). All sampled values numeric → [`ColumnType::Numeric`]; else all
/// date-like → [`ColumnType::Datetime`]; else [`ColumnType::Categorical`].
/// An entirely empty column defaults to categorical.
pub fn infer_column_type<'a, I>(values: I, sample_size: usize) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let sample: Vec<&str> = values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .take(sample_size)
        .collect();

    if sample.is_empty() {
        return ColumnType::Categorical;
    }

    if sample.iter().all(|value| is_numeric(value)) {
        return ColumnType::Numeric;
    }

    if sample.iter().all(|value| is_date_like(value)) {
        return ColumnType::Datetime;
    }

    ColumnType::Categorical
}
