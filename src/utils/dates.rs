//! Timestamp normalization.
//!
//! GitHub reports timestamps as RFC 3339 with a `Z` suffix; the Jira importer
//! expects an explicit numeric offset.

use chrono::DateTime;

/// Rewrite a UTC timestamp with an explicit `+00:00` offset.
///
/// Only the `Z` suffix is replaced; the rest of the text, fractional seconds
/// included, is kept as written. Input without a `Z` suffix is returned
/// unchanged.
///
pub fn normalize_timestamp(timestamp: &str) -> String {
    match timestamp.strip_suffix('Z') {
        Some(stripped) => {
            if let Err(e) = DateTime::parse_from_rfc3339(timestamp) {
                log::debug!("Timestamp '{}' is not RFC 3339 ({})", timestamp, e);
            }
            format!("{}+00:00", stripped)
        }
        None => timestamp.to_string(),
    }
}
