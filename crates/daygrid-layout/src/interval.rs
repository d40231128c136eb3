#![forbid(unsafe_code)]

//! Interval collision model.
//!
//! [`TimeSpan`] strips an event down to its two instants and answers the
//! only two questions the packer asks: do two intervals collide, and in
//! which order are they processed.
//!
//! # Invariants
//!
//! 1. `intersects` is inclusive on both ends: intervals that merely touch
//!    (`a.end == b.begin`) collide.
//! 2. `intersects` is symmetric and reflexive.
//! 3. `processing_order` sorts by `begin` ascending, then by `end`
//!    descending, so the longest of several simultaneous events claims the
//!    leftmost column.
//!
//! # Failure Modes
//!
//! None. Callers validate `begin <= end` before building spans.

use std::cmp::Ordering;

use daygrid_core::{Interval, Timestamp};
use serde::{Deserialize, Serialize};

/// The time extent of one event, detached from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    pub begin: Timestamp,
    pub end: Timestamp,
}

impl TimeSpan {
    /// Create a span from its two instants.
    #[inline]
    #[must_use]
    pub const fn new(begin: Timestamp, end: Timestamp) -> Self {
        Self { begin, end }
    }

    /// Capture the extent of any interval.
    #[inline]
    #[must_use]
    pub fn of(interval: &impl Interval) -> Self {
        Self::new(interval.begin(), interval.end())
    }

    /// Whether `begin <= end`.
    #[inline]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.begin <= self.end
    }

    /// Whether the instant lies within `[begin, end]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.begin <= instant && instant <= self.end
    }

    /// Whether the two closed intervals share at least one instant.
    #[must_use]
    pub fn intersects(&self, other: &TimeSpan) -> bool {
        other.contains(self.begin)
            || other.contains(self.end)
            || self.contains(other.begin)
            || self.contains(other.end)
    }

    /// Order in which the packer visits spans.
    #[must_use]
    pub fn processing_order(&self, other: &TimeSpan) -> Ordering {
        self.begin
            .cmp(&other.begin)
            .then_with(|| other.end.cmp(&self.end))
    }

    /// Length in milliseconds.
    #[inline]
    #[must_use]
    pub fn duration_millis(&self) -> i64 {
        self.end.as_millis().saturating_sub(self.begin.as_millis())
    }
}

impl Interval for TimeSpan {
    fn begin(&self) -> Timestamp {
        self.begin
    }

    fn end(&self) -> Timestamp {
        self.end
    }
}

impl<E: Interval> From<&E> for TimeSpan {
    fn from(interval: &E) -> Self {
        Self::of(interval)
    }
}

/// Whether two intervals collide (touching endpoints included).
#[must_use]
pub fn intersects(a: &impl Interval, b: &impl Interval) -> bool {
    TimeSpan::of(a).intersects(&TimeSpan::of(b))
}
