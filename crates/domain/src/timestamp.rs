//! Normalization of API timestamps.
//!
//! The Subnoto API reports dates as raw numbers that may be either seconds
//! or milliseconds since the Unix epoch depending on the endpoint. Values
//! below 1e12 are seconds.

use chrono::{DateTime, Utc};

/// Threshold separating second- from millisecond-precision timestamps.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// A raw timestamp as delivered by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimestamp(pub i64);

impl ApiTimestamp {
    /// Normalizes the raw value to a UTC datetime.
    ///
    /// Out-of-range values clamp to the Unix epoch rather than failing;
    /// a bad date in a list row is not worth aborting a load over.
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        let millis = if self.0.abs() < MILLIS_THRESHOLD {
            self.0.saturating_mul(1000)
        } else {
            self.0
        };
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(|| DateTime::UNIX_EPOCH)
    }
}

impl From<i64> for ApiTimestamp {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Formats a raw API timestamp for display in a list row,
/// e.g. `12 Mar 2026, 14:05`.
#[must_use]
pub fn format_timestamp(raw: i64) -> String {
    ApiTimestamp(raw)
        .to_datetime()
        .format("%-d %b %Y, %H:%M")
        .to_string()
}
