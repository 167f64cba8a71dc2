//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// UTC timestamp stamped on every emitted record.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as ISO-8601 with microsecond precision and a `Z` suffix,
/// e.g. `2024-03-01T12:00:00.250000Z`.
#[must_use]
pub fn format_iso8601(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `serde(serialize_with)` adapter for [`format_iso8601`].
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize_iso8601<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso8601(ts))
}
