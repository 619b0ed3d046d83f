//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp for a calendar date and hour, UTC.
    pub fn at_utc(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "timestamp",
                    format!("{:04}-{:02}-{:02} {:02}:00 is not a valid UTC time", year, month, day, hour),
                )
            })
    }

    /// Same UTC calendar day at `hour`:00.
    pub fn with_hour(&self, hour: u32) -> Result<Self, ValidationError> {
        self.0
            .date_naive()
            .and_hms_opt(hour, 0, 0)
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ValidationError::out_of_range("hour", 0, 23, i64::from(hour)))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of hours.
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Returns true if both timestamps fall on the same UTC calendar day.
    pub fn same_day_as(&self, other: &Timestamp) -> bool {
        self.0.date_naive() == other.0.date_naive()
    }

    /// Formats as `Oct 01, 2025 - 08:00 UTC`.
    pub fn format_long(&self) -> String {
        self.0.format("%b %d, %Y - %H:%M UTC").to_string()
    }

    /// Formats the time of day as `08:00 UTC`.
    pub fn format_time(&self) -> String {
        self.0.format("%H:%M UTC").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
