//! Form-boundary helpers: label lists and date-only due dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Split comma-separated label text into trimmed, non-empty labels.
///
/// Order and duplicates are preserved.
#[must_use]
pub fn parse_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

/// Render labels back into editable text.
#[must_use]
pub fn format_labels(labels: &[String]) -> String {
    labels.join(", ")
}

/// Parse a `YYYY-MM-DD` date into midnight UTC of that day.
///
/// Blank or malformed input yields `None`.
#[must_use]
pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render an instant as the `YYYY-MM-DD` date it falls on in UTC.
#[must_use]
pub fn format_due_date(due: Option<&DateTime<Utc>>) -> String {
    due.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
