use chrono::{DateTime, Utc};

/// The `YYYY-MM-DDTHH:MM:SS.sssZ` layout shared by log records and normalized
/// market data keys.
pub const RFC9557_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a UTC instant with millisecond precision and a `Z` suffix.
pub fn format_rfc9557(ts: &DateTime<Utc>) -> String {
    ts.format(RFC9557_UTC_FORMAT).to_string()
}

/// Current UTC time, formatted by [`format_rfc9557`].
pub fn current_datetime_rfc9557() -> String {
    let now: DateTime<Utc> = Utc::now();
    format_rfc9557(&now)
}
