//! Row parsing and timestamp encoding helpers.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Encode a timestamp for a TEXT column.
///
/// Fixed-width RFC 3339 with nanoseconds, so lexical order in SQL equals
/// chronological order and the value roundtrips losslessly.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a TEXT column written by [`format_timestamp`] (or any RFC 3339 value).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse timestamp '{s}': {e}")))
}
