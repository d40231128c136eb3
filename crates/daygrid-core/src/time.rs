#![forbid(unsafe_code)]

//! Wall-clock timestamps and calendar field extraction.
//!
//! A [`Timestamp`] is a naive instant: milliseconds since
//! `1970-01-01T00:00:00` with no zone attached. Field extraction is done by
//! free functions over the integer value, so no shared calendar object is
//! ever consulted and every helper is safe to call from any thread.
//!
//! # Invariants
//!
//! 1. `millis_of_day(t)` is always in `0..MILLIS_PER_DAY`, also for
//!    instants before the epoch.
//! 2. `hour_of_day(t)` is always in `0..24`.
//! 3. `start_of_day(t) <= t` and `t - start_of_day(t) == millis_of_day(t)`.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// A naive wall-clock instant in epoch milliseconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// `1970-01-01T00:00:00`.
    pub const EPOCH: Self = Self(0);

    /// Create a timestamp from raw epoch milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw epoch milliseconds.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Build a timestamp from calendar fields.
    ///
    /// Returns `None` for impossible dates or times (e.g. February 30th).
    #[must_use]
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, min, sec)
            .map(Self::from_naive)
    }

    /// Convert from a chrono naive date-time.
    #[must_use]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime.and_utc().timestamp_millis())
    }

    /// Convert to a chrono naive date-time, or `None` if out of chrono's range.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.naive_utc())
    }

    /// Shift by a signed number of milliseconds, saturating at the bounds.
    #[inline]
    #[must_use]
    pub const fn saturating_add_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Shift by whole minutes, saturating at the bounds.
    #[inline]
    #[must_use]
    pub const fn saturating_add_minutes(self, minutes: i64) -> Self {
        self.saturating_add_millis(minutes.saturating_mul(MILLIS_PER_MINUTE))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Milliseconds elapsed since the start of the timestamp's day.
#[inline]
#[must_use]
pub const fn millis_of_day(ts: Timestamp) -> i64 {
    ts.0.rem_euclid(MILLIS_PER_DAY)
}

/// Hour of the day, `0..24`.
#[inline]
#[must_use]
pub const fn hour_of_day(ts: Timestamp) -> u32 {
    (millis_of_day(ts) / MILLIS_PER_HOUR) as u32
}

/// Minute of the hour, `0..60`.
#[inline]
#[must_use]
pub const fn minute_of_hour(ts: Timestamp) -> u32 {
    ((millis_of_day(ts) % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32
}

/// Midnight at the start of the timestamp's day.
#[inline]
#[must_use]
pub const fn start_of_day(ts: Timestamp) -> Timestamp {
    Timestamp(ts.0 - millis_of_day(ts))
}

/// Ordinal day of the year, starting at 1.
#[must_use]
pub fn day_of_year(ts: Timestamp) -> Option<u32> {
    ts.to_naive().map(|dt| dt.ordinal())
}

/// Convert a millisecond count to fractional hours.
#[inline]
#[must_use]
pub fn millis_to_hours(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_HOUR as f64
}

/// Absolute distance between two instants, in fractional hours.
#[must_use]
pub fn hours_between(a: Timestamp, b: Timestamp) -> f64 {
    a.0.abs_diff(b.0) as f64 / MILLIS_PER_HOUR as f64
}
