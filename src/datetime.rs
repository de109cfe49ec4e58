//! Date/time utilities for Anonboard.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

use crate::{BoardError, Result};

/// Current time, truncated to the storage precision (microseconds).
///
/// Creation and bump timestamps are stamped with this so a document
/// read back from storage compares equal to the in-memory value it was
/// written from.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1000 * 1000)
        .unwrap_or(now)
}

/// Format a UTC timestamp for storage.
///
/// Stored timestamps use fixed-width RFC 3339 with microsecond precision
/// and a `Z` suffix, so lexicographic order equals chronological order and
/// `ORDER BY bumped_on DESC` works on the text column directly.
pub fn format_stored(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp back into a `DateTime<Utc>`.
pub fn parse_stored(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| BoardError::Database(format!("invalid stored timestamp {s:?}: {e}")))
}
