//! Time related utils.

use std::sync::Arc;

use chrono::SecondsFormat;
use chrono::Utc;

use crate::Error;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// A clock yields the current instant.
///
/// Injected clocks must report UTC instants for signed timestamps to stay
/// canonical; [`DateTime`] enforces that at the type level.
pub type Clock = Arc<dyn Fn() -> DateTime + Send + Sync>;

/// Create a clock backed by the system time.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Create current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC3339 with up to nanosecond precision: "2025-08-29T20:00:00.123Z"
///
/// Trailing zero sub-second digits are trimmed, so a whole second renders
/// as "2025-08-29T20:00:00Z".
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse time from RFC3339, normalized to UTC.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::unexpected("failed to parse rfc3339 datetime").with_source(e))
}
