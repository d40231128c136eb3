#![forbid(unsafe_code)]

//! The band of hours a day view shows.

use daygrid_core::Interval;
use daygrid_core::time::hour_of_day;
use serde::{Deserialize, Serialize};

use crate::config::{DayConfig, FitMode, HOURS_PER_DAY};

/// Visible hours `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The configured window, ignoring events.
    #[must_use]
    pub const fn configured(config: &DayConfig) -> Self {
        Self::new(config.start_hour, config.end_hour)
    }

    /// Resolve the window for `events` under the config's [`FitMode`].
    ///
    /// With no events the configured window is returned for every mode.
    pub fn fit<E: Interval>(config: &DayConfig, events: &[E]) -> Self {
        let configured = Self::configured(config);
        let first = events.iter().map(|e| hour_of_day(e.begin())).min();
        let last = events.iter().map(|e| hour_of_day(e.end())).max();
        let (Some(first), Some(last)) = (first, last) else {
            return configured;
        };
        // An event running past midnight ends at an early hour; keep the
        // window at least one hour tall.
        let last = (last + 1).min(HOURS_PER_DAY).max(first + 1);

        match config.fit {
            FitMode::Auto => Self::new(first, last),
            FitMode::BoundsAdaptive => {
                Self::new(configured.start.min(first), configured.end.max(last))
            }
            FitMode::BoundsStrict => configured,
        }
    }

    /// Number of visible hours.
    #[inline]
    #[must_use]
    pub const fn hours(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `event` is drawn on the grid for this window.
    ///
    /// The event must start and end inside the window and must not start
    /// and end within the same hour.
    #[must_use]
    pub fn admits(self, event: &impl Interval) -> bool {
        let begin = hour_of_day(event.begin());
        let end = hour_of_day(event.end());
        begin >= self.start && end <= self.end && begin < end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daygrid_core::Timestamp;
    use std::ops::Range;

    fn ev(from: (u32, u32), to: (u32, u32)) -> Range<Timestamp> {
        let at = |(h, m)| Timestamp::ymd_hms(2020, 1, 1, h, m, 0).expect("valid time");
        at(from)..at(to)
    }

    #[test]
    fn auto_hugs_event_hours() {
        let config = DayConfig::default().window(0, 24).fit(FitMode::Auto);
        let events = [ev((8, 15), (9, 0)), ev((9, 30), (10, 45))];
        assert_eq!(HourWindow::fit(&config, &events), HourWindow::new(8, 11));
    }

    #[test]
    fn auto_caps_at_midnight() {
        let config = DayConfig::default();
        let events = [ev((22, 0), (23, 30))];
        assert_eq!(HourWindow::fit(&config, &events), HourWindow::new(22, 24));
    }

    #[test]
    fn auto_never_inverts_for_events_past_midnight() {
        let config = DayConfig::default();
        let begin = Timestamp::ymd_hms(2020, 1, 1, 23, 0, 0).expect("valid time");
        let end = Timestamp::ymd_hms(2020, 1, 2, 1, 0, 0).expect("valid time");
        let window = HourWindow::fit(&config, &[begin..end]);
        assert_eq!(window, HourWindow::new(23, 24));
        assert!(!window.admits(&(begin..end)));
    }

    #[test]
    fn adaptive_only_widens() {
        let config = DayConfig::default().window(9, 17).fit(FitMode::BoundsAdaptive);
        assert_eq!(
            HourWindow::fit(&config, &[ev((7, 0), (8, 0))]),
            HourWindow::new(7, 17)
        );
        assert_eq!(
            HourWindow::fit(&config, &[ev((10, 0), (11, 0))]),
            HourWindow::new(9, 17)
        );
        assert_eq!(
            HourWindow::fit(&config, &[ev((16, 0), (18, 30))]),
            HourWindow::new(9, 19)
        );
    }

    #[test]
    fn strict_ignores_events() {
        let config = DayConfig::default().window(9, 17).fit(FitMode::BoundsStrict);
        assert_eq!(
            HourWindow::fit(&config, &[ev((6, 0), (23, 0))]),
            HourWindow::new(9, 17)
        );
    }

    #[test]
    fn no_events_keeps_configured_window() {
        let config = DayConfig::default().window(7, 20);
        let events: [Range<Timestamp>; 0] = [];
        assert_eq!(HourWindow::fit(&config, &events), HourWindow::new(7, 20));
    }

    #[test]
    fn admits_requires_distinct_hours_inside_window() {
        let window = HourWindow::new(9, 17);
        assert!(window.admits(&ev((9, 0), (10, 0))));
        assert!(window.admits(&ev((16, 30), (17, 0))));
        assert!(!window.admits(&ev((10, 10), (10, 30))));
        assert!(!window.admits(&ev((8, 30), (9, 30))));
        assert!(!window.admits(&ev((16, 0), (18, 0))));
        assert_eq!(window.hours(), 8);
    }
}
