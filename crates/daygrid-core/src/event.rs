#![forbid(unsafe_code)]

//! Traits implemented by caller-owned event payloads.
//!
//! The layout engine never looks at an event beyond these accessors, so the
//! payload type stays opaque and is carried through layout unchanged.

use std::ops::Range;

use crate::time::Timestamp;

/// A closed time interval `[begin, end]`.
///
/// Implementors must uphold `begin() <= end()`. Zero-length intervals are
/// allowed.
pub trait Interval {
    /// Start instant.
    fn begin(&self) -> Timestamp;

    /// End instant.
    fn end(&self) -> Timestamp;

    /// Length of the interval in milliseconds (saturating).
    fn duration_millis(&self) -> i64 {
        self.end()
            .as_millis()
            .saturating_sub(self.begin().as_millis())
    }
}

/// An interval that may also be flagged as covering the whole day.
pub trait CalendarEvent: Interval {
    /// Whether the event belongs to the all-day strip instead of the grid.
    fn is_all_day(&self) -> bool {
        false
    }
}

impl<T: Interval + ?Sized> Interval for &T {
    fn begin(&self) -> Timestamp {
        (**self).begin()
    }

    fn end(&self) -> Timestamp {
        (**self).end()
    }
}

impl<T: CalendarEvent + ?Sized> CalendarEvent for &T {
    fn is_all_day(&self) -> bool {
        (**self).is_all_day()
    }
}

impl<T: Interval + ?Sized> Interval for Box<T> {
    fn begin(&self) -> Timestamp {
        (**self).begin()
    }

    fn end(&self) -> Timestamp {
        (**self).end()
    }
}

impl<T: CalendarEvent + ?Sized> CalendarEvent for Box<T> {
    fn is_all_day(&self) -> bool {
        (**self).is_all_day()
    }
}

impl Interval for Range<Timestamp> {
    fn begin(&self) -> Timestamp {
        self.start
    }

    fn end(&self) -> Timestamp {
        self.end
    }
}

impl CalendarEvent for Range<Timestamp> {}

impl Interval for (Timestamp, Timestamp) {
    fn begin(&self) -> Timestamp {
        self.0
    }

    fn end(&self) -> Timestamp {
        self.1
    }
}

impl CalendarEvent for (Timestamp, Timestamp) {}
