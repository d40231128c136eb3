//! Reading events and configuration from disk or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDateTime;
use daygrid_core::{CalendarEvent, Interval, Timestamp};
use daygrid_day::DayConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One event as it appears in the input JSON.
///
/// ```json
/// { "title": "standup", "begin": "2021-03-15T09:00:00", "end": "2021-03-15T09:15:00" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliEvent {
    pub title: String,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub all_day: bool,
}

impl Interval for CliEvent {
    fn begin(&self) -> Timestamp {
        Timestamp::from_naive(self.begin)
    }

    fn end(&self) -> Timestamp {
        Timestamp::from_naive(self.end)
    }
}

impl CalendarEvent for CliEvent {
    fn is_all_day(&self) -> bool {
        self.all_day
    }
}

/// Read the text at `source`; `-` means stdin.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut raw = String::new();
        io::stdin().lock().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}

pub fn parse_events(raw: &str) -> Result<Vec<CliEvent>> {
    Ok(serde_json::from_str(raw)?)
}

/// Load and parse the events at `source`.
pub fn read_events(source: &str) -> Result<Vec<CliEvent>> {
    let raw = read_source(source)?;
    let events = parse_events(&raw)?;
    tracing::debug!(source, count = events.len(), "events loaded");
    Ok(events)
}

/// Load the day configuration, or the defaults when no file is given.
pub fn read_config(path: Option<&Path>) -> Result<DayConfig> {
    let Some(path) = path else {
        return Ok(DayConfig::default());
    };
    let raw = fs::read_to_string(path)?;
    let config = DayConfig::from_json_str(&raw)?;
    tracing::debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
