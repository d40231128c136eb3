//! Rendering layout results as JSON or as a plain-text table.

use std::io::Write;

use clap::ValueEnum;
use daygrid_day::{DayContent, DayLayout};
use daygrid_layout::{LayoutStats, Positioned};
use serde::Serialize;

use crate::error::Result;
use crate::input::CliEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Serialize)]
struct OrganizeReport<'a> {
    stats: LayoutStats,
    events: &'a [Positioned<CliEvent>],
}

pub fn write_organize(
    out: &mut impl Write,
    positioned: &[Positioned<CliEvent>],
    stats: LayoutStats,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = OrganizeReport {
                stats,
                events: positioned,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<24} {:<19} {:<19} {:>3} {:>3} {:>4} {:>4} {:>9} {:>9}",
                "TITLE", "BEGIN", "END", "RUN", "COL", "SPAN", "COLS", "X", "WIDTH"
            )?;
            for p in positioned {
                writeln!(
                    out,
                    "{:<24} {:<19} {:<19} {:>3} {:>3} {:>4} {:>4} {:>9.2} {:>9.2}",
                    p.event.title,
                    p.event.begin.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    p.event.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    p.placement.run,
                    p.placement.column,
                    p.placement.span,
                    p.placement.columns,
                    p.x,
                    p.extent,
                )?;
            }
            writeln!(
                out,
                "{} events, {} runs, at most {} columns",
                stats.events, stats.runs, stats.max_columns
            )?;
        }
    }
    Ok(())
}

pub fn write_day(
    out: &mut impl Write,
    layout: &DayLayout<CliEvent>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, layout)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_day_table(out, layout)?,
    }
    Ok(())
}

fn write_day_table(out: &mut impl Write, layout: &DayLayout<CliEvent>) -> Result<()> {
    writeln!(
        out,
        "window {:02}:00-{:02}:00, hour height {:.2}, gutter {:.2}",
        layout.window.start, layout.window.end, layout.hour_height, layout.gutter
    )?;
    // Hidden events are still listed on an otherwise empty day.
    if layout.content() == DayContent::Empty {
        writeln!(out, "no events")?;
    }

    for event in &layout.all_day {
        writeln!(out, "all day  {}", event.title)?;
    }
    if !layout.timed.is_empty() {
        writeln!(
            out,
            "{:<24} {:>9} {:>9} {:>9} {:>9}",
            "TITLE", "X", "Y", "WIDTH", "HEIGHT"
        )?;
    }
    for event_box in &layout.timed {
        let b = event_box.bounds;
        writeln!(
            out,
            "{:<24} {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
            event_box.event.title, b.x, b.y, b.width, b.height
        )?;
    }
    for event in &layout.outside_window {
        writeln!(out, "hidden   {}", event.title)?;
    }
    Ok(())
}
