//! Shared parsing helpers.
//!
//! Cell values are raw strings at the parse boundary; these helpers are the
//! only place a cell is interpreted as a number or as missing, so every
//! component classifies values identically.

/// Try to parse a cell as a finite numeric value.
///
/// # Example
///
/// ```
/// use scout_profiling::utils::parse_numeric;
///
/// assert_eq!(parse_numeric("42"), Some(42.0));
/// assert_eq!(parse_numeric(" -3.5 "), Some(-3.5));
/// assert_eq!(parse_numeric("hello"), None);
/// assert_eq!(parse_numeric(""), None);
/// ```
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check if a cell can be parsed as a finite numeric value.
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

/// Check if a cell counts as missing (empty or whitespace-only).
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// Truncate a string to a maximum character count with an ellipsis.
pub fn truncate_str(value: &str, max_len: usize) -> String {
    if value.chars().count() <= max_len {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
