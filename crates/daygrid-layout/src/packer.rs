#![forbid(unsafe_code)]

//! Column packer.
//!
//! Events are visited once in [`TimeSpan::processing_order`]. A running
//! watermark holds the latest end seen in the current run; as soon as an
//! event starts at or after it, nothing visited so far can collide with
//! anything still to come, so the run is packed and the columns reset.
//!
//! Inside a run each event takes the first column whose last occupant it
//! does not collide with, or opens a new column. When the run closes, every
//! event spreads rightward through the following columns until one of them
//! holds an event it collides with.
//!
//! # Invariants
//!
//! 1. Output length and order equal the input's.
//! 2. Two events in the same column of the same run never collide.
//! 3. `0 <= offset < 1` and `0 < width <= 1`, with `offset + width <= 1`.
//! 4. The result depends only on the input; no state outlives a call.
//!
//! # Failure Modes
//!
//! - [`LayoutError::InvalidWidth`] for a zero, negative, or non-finite width.
//! - [`LayoutError::InvertedInterval`] for an event with `begin > end`.

use std::ops::Range;

use daygrid_core::{CalendarEvent, Interval, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::interval::TimeSpan;

/// Where an event landed inside its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Zero-based index of the run, in processing order.
    pub run: usize,
    /// Zero-based column index within the run.
    pub column: usize,
    /// Number of consecutive columns covered, starting at `column`.
    pub span: usize,
    /// Total number of columns in the run.
    pub columns: usize,
}

impl Placement {
    /// A lone event covering the full width.
    pub const FULL: Self = Self {
        run: 0,
        column: 0,
        span: 1,
        columns: 1,
    };

    /// Horizontal start as a fraction of the total width.
    #[inline]
    #[must_use]
    pub fn offset_fraction(self) -> f64 {
        self.column as f64 / self.columns as f64
    }

    /// Horizontal extent as a fraction of the total width.
    #[inline]
    #[must_use]
    pub fn width_fraction(self) -> f64 {
        self.span as f64 / self.columns as f64
    }

    /// Columns covered by this placement.
    #[inline]
    #[must_use]
    pub fn column_range(self) -> Range<usize> {
        self.column..self.column + self.span
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::FULL
    }
}

/// An event annotated with its horizontal position.
///
/// `offset`/`width` are fractions of the layout width; `x`/`extent` are the
/// same values scaled by the width passed to [`organize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positioned<E> {
    pub event: E,
    pub placement: Placement,
    pub offset: f64,
    pub width: f64,
    pub x: f64,
    pub extent: f64,
}

impl<E> Positioned<E> {
    fn new(event: E, placement: Placement, layout_width: f64) -> Self {
        let columns = placement.columns as f64;
        Self {
            event,
            placement,
            offset: placement.offset_fraction(),
            width: placement.width_fraction(),
            x: placement.column as f64 * layout_width / columns,
            extent: placement.span as f64 * layout_width / columns,
        }
    }

    /// Drop the position and return the payload.
    pub fn into_inner(self) -> E {
        self.event
    }

    /// Replace the payload, keeping the position.
    pub fn map<U>(self, f: impl FnOnce(E) -> U) -> Positioned<U> {
        Positioned {
            event: f(self.event),
            placement: self.placement,
            offset: self.offset,
            width: self.width,
            x: self.x,
            extent: self.extent,
        }
    }

    /// Horizontal coverage as a half-open fraction range.
    #[must_use]
    pub fn horizontal(&self) -> Range<f64> {
        self.offset..self.offset + self.width
    }
}

impl<E: Interval> Interval for Positioned<E> {
    fn begin(&self) -> Timestamp {
        self.event.begin()
    }

    fn end(&self) -> Timestamp {
        self.event.end()
    }
}

impl<E: CalendarEvent> CalendarEvent for Positioned<E> {
    fn is_all_day(&self) -> bool {
        self.event.is_all_day()
    }
}

/// Summary of one `organize` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Events laid out.
    pub events: usize,
    /// Independent runs packed.
    pub runs: usize,
    /// Widest run, in columns.
    pub max_columns: usize,
}

/// Lay out `events` across `width` pixels.
///
/// The input order is preserved in the output. See the module docs for the
/// placement rules.
pub fn organize<E, I>(events: I, width: f64) -> Result<Vec<Positioned<E>>>
where
    I: IntoIterator<Item = E>,
    E: Interval,
{
    organize_with_stats(events, width).map(|(positioned, _)| positioned)
}

/// Like [`organize`], also reporting run and column counts.
pub fn organize_with_stats<E, I>(
    events: I,
    width: f64,
) -> Result<(Vec<Positioned<E>>, LayoutStats)>
where
    I: IntoIterator<Item = E>,
    E: Interval,
{
    if !width.is_finite() || width <= 0.0 {
        return Err(LayoutError::InvalidWidth { width });
    }

    let events: Vec<E> = events.into_iter().collect();
    let spans: Vec<TimeSpan> = events.iter().map(TimeSpan::of).collect();
    if let Some((index, span)) = spans.iter().enumerate().find(|(_, s)| !s.is_well_formed()) {
        return Err(LayoutError::InvertedInterval {
            index,
            begin: span.begin,
            end: span.end,
        });
    }

    #[cfg(feature = "tracing")]
    let organize_span = tracing::debug_span!(
        "layout.organize",
        event_count = spans.len(),
        run_count = tracing::field::Empty,
        max_columns = tracing::field::Empty
    );
    #[cfg(feature = "tracing")]
    let _organize_guard = organize_span.enter();

    let (placements, stats) = ColumnPacker::new(&spans).pack_all();

    #[cfg(feature = "tracing")]
    {
        organize_span.record("run_count", stats.runs);
        organize_span.record("max_columns", stats.max_columns);
    }

    let positioned = events
        .into_iter()
        .zip(placements)
        .map(|(event, placement)| Positioned::new(event, placement, width))
        .collect();
    Ok((positioned, stats))
}

/// Per-call packing state. Lives only for the duration of one `organize`.
struct ColumnPacker<'a> {
    spans: &'a [TimeSpan],
    /// Event indices per column, earliest first.
    columns: Vec<Vec<usize>>,
    /// Latest end seen in the open run.
    watermark: Option<Timestamp>,
    placements: Vec<Placement>,
    stats: LayoutStats,
}

impl<'a> ColumnPacker<'a> {
    fn new(spans: &'a [TimeSpan]) -> Self {
        Self {
            spans,
            columns: Vec::new(),
            watermark: None,
            placements: vec![Placement::FULL; spans.len()],
            stats: LayoutStats {
                events: spans.len(),
                ..LayoutStats::default()
            },
        }
    }

    fn pack_all(mut self) -> (Vec<Placement>, LayoutStats) {
        let spans = self.spans;
        let mut order: Vec<usize> = (0..spans.len()).collect();
        // Stable: identical spans keep their input order.
        order.sort_by(|&a, &b| spans[a].processing_order(&spans[b]));

        for index in order {
            self.push(index);
        }
        self.close_run();
        (self.placements, self.stats)
    }

    fn push(&mut self, index: usize) {
        let span = self.spans[index];
        if self.watermark.is_some_and(|mark| span.begin >= mark) {
            self.close_run();
        }

        let spans = self.spans;
        let free = self.columns.iter().position(|column| {
            column
                .last()
                .is_some_and(|&last| !span.intersects(&spans[last]))
        });
        match free {
            Some(column) => self.columns[column].push(index),
            None => self.columns.push(vec![index]),
        }

        self.watermark = Some(self.watermark.map_or(span.end, |mark| mark.max(span.end)));
    }

    fn close_run(&mut self) {
        if self.columns.is_empty() {
            return;
        }

        let run = self.stats.runs;
        let columns = self.columns.len();
        for (column, members) in self.columns.iter().enumerate() {
            for &index in members {
                let span = expand(self.spans, &self.columns, index, column);
                self.placements[index] = Placement {
                    run,
                    column,
                    span,
                    columns,
                };
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "layout.run",
            run,
            columns,
            events = self.columns.iter().map(Vec::len).sum::<usize>()
        );

        self.stats.runs += 1;
        self.stats.max_columns = self.stats.max_columns.max(columns);
        self.columns.clear();
        self.watermark = None;
    }
}

/// Number of columns the event at `index` can cover starting at `column`.
///
/// Every occupant of a candidate column is checked, not just its last one:
/// an earlier occupant may still overlap.
fn expand(spans: &[TimeSpan], columns: &[Vec<usize>], index: usize, column: usize) -> usize {
    let span = &spans[index];
    let clear = columns[column + 1..]
        .iter()
        .take_while(|members| members.iter().all(|&other| !span.intersects(&spans[other])))
        .count();
    1 + clear
}
