#![forbid(unsafe_code)]

//! Turn a day's events into pixel boxes.
//!
//! [`lay_out_day`] runs the whole driver pipeline:
//!
//! 1. split all-day events from timed ones;
//! 2. resolve the [`HourWindow`] and the hour height;
//! 3. drop timed events the window does not admit;
//! 4. pack the rest with [`daygrid_layout::organize_with_stats`] across the
//!    width left of the gutter;
//! 5. convert placements and times into [`Rect`]s, and emit gutter labels.
//!
//! The vertical origin is the top of the window's first hour.

use daygrid_core::time::{hours_between, millis_of_day, millis_to_hours};
use daygrid_core::{CalendarEvent, Rect};
use daygrid_layout::{LayoutError, LayoutStats, Placement, organize_with_stats};
use serde::{Deserialize, Serialize};

use crate::config::{DayConfig, DisplayMode};
use crate::error::{DayError, Result};
use crate::window::HourWindow;

/// A timed event with its final on-screen box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBox<E> {
    pub event: E,
    pub placement: Placement,
    pub bounds: Rect,
}

/// One gutter label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLabel {
    pub hour: u32,
    pub text: String,
    pub bounds: Rect,
}

/// Which parts of the day view have something to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayContent {
    Empty,
    AllDayOnly,
    TimedOnly,
    Both,
}

/// Result of laying out a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout<E> {
    pub window: HourWindow,
    pub hour_height: f64,
    pub gutter: f64,
    /// All-day events, in input order. Never packed.
    pub all_day: Vec<E>,
    /// Timed events drawn on the grid, in input order.
    pub timed: Vec<EventBox<E>>,
    /// Timed events the window rejected, in input order.
    pub outside_window: Vec<E>,
    pub labels: Vec<HourLabel>,
    pub stats: LayoutStats,
}

impl<E> DayLayout<E> {
    #[must_use]
    pub fn content(&self) -> DayContent {
        match (self.all_day.is_empty(), self.timed.is_empty()) {
            (true, true) => DayContent::Empty,
            (false, true) => DayContent::AllDayOnly,
            (true, false) => DayContent::TimedOnly,
            (false, false) => DayContent::Both,
        }
    }

    /// Nothing to draw: the host should show its empty-day view.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content() == DayContent::Empty
    }

    /// The timed event whose box covers pixel `(x, y)`.
    pub fn event_at(&self, x: f64, y: f64) -> Option<&EventBox<E>> {
        self.timed.iter().find(|b| b.bounds.contains(x, y))
    }

    /// Timed events with any area inside `viewport`, e.g. the scrolled-to part
    /// of a tall day.
    pub fn visible_in(&self, viewport: Rect) -> impl Iterator<Item = &EventBox<E>> + '_ {
        self.timed
            .iter()
            .filter(move |b| b.bounds.overlaps(&viewport))
    }

    /// Height of the whole hour grid in pixels.
    #[must_use]
    pub fn grid_height(&self) -> f64 {
        f64::from(self.window.hours()) * self.hour_height
    }
}

/// Lay out one day of `events` in a `width` x `container_height` area.
///
/// `container_height` is only read in [`DisplayMode::FitToContainer`].
pub fn lay_out_day<E, I>(
    events: I,
    config: &DayConfig,
    width: f64,
    container_height: f64,
) -> Result<DayLayout<E>>
where
    I: IntoIterator<Item = E>,
    E: CalendarEvent,
{
    config.validate()?;
    if !width.is_finite() || width <= 0.0 {
        return Err(LayoutError::InvalidWidth { width }.into());
    }

    let events: Vec<E> = events.into_iter().collect();
    if let Some((index, event)) = events
        .iter()
        .enumerate()
        .find(|(_, e)| e.begin() > e.end())
    {
        return Err(LayoutError::InvertedInterval {
            index,
            begin: event.begin(),
            end: event.end(),
        }
        .into());
    }

    let (all_day, timed): (Vec<E>, Vec<E>) =
        events.into_iter().partition(CalendarEvent::is_all_day);

    let window = HourWindow::fit(config, &timed);
    let hour_height = resolve_hour_height(config, window, container_height)?;
    let gutter = if config.hours.shows_gutter() {
        width / f64::from(config.gutter_divisor)
    } else {
        0.0
    };

    let (admitted, outside_window): (Vec<E>, Vec<E>) =
        timed.into_iter().partition(|event| window.admits(event));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "day.window",
        start = window.start,
        end = window.end,
        hour_height,
        admitted = admitted.len(),
        outside_window = outside_window.len(),
        all_day = all_day.len()
    );

    let (positioned, stats) = organize_with_stats(admitted, width - gutter)?;
    let top = f64::from(window.start) * hour_height;
    let timed = positioned
        .into_iter()
        .map(|p| {
            let begin = p.event.begin();
            let end = p.event.end();
            let y = millis_to_hours(millis_of_day(begin)) * hour_height - top;
            let height = hours_between(begin, end) * hour_height;
            EventBox {
                bounds: Rect::new(gutter + p.x, y, p.extent, height),
                placement: p.placement,
                event: p.event,
            }
        })
        .collect();

    let labels = (window.start..window.end)
        .filter_map(|hour| {
            config.hours.label(hour).map(|text| HourLabel {
                hour,
                text,
                bounds: Rect::new(0.0, f64::from(hour) * hour_height - top, gutter, hour_height),
            })
        })
        .collect();

    Ok(DayLayout {
        window,
        hour_height,
        gutter,
        all_day,
        timed,
        outside_window,
        labels,
        stats,
    })
}

fn resolve_hour_height(config: &DayConfig, window: HourWindow, container_height: f64) -> Result<f64> {
    match config.display {
        DisplayMode::Expand => Ok(config.hour_height),
        DisplayMode::FitToContainer => {
            if !container_height.is_finite() || container_height <= 0.0 {
                return Err(DayError::InvalidContainerHeight {
                    height: container_height,
                });
            }
            Ok(container_height / f64::from(window.hours().max(1)))
        }
    }
}
