//! Wall-clock timestamps for persisted records.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current UTC time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    format_rfc3339(OffsetDateTime::now_utc())
}

/// Format `at` as RFC 3339, or an empty string if the value is out of range.
pub fn format_rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|e| {
        leptos::logging::warn!("timestamp format failed: {e}");
        String::new()
    })
}
