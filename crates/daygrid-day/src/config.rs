#![forbid(unsafe_code)]

//! Day view configuration.
//!
//! [`DayConfig`] is plain data: it deserializes from JSON with every field
//! optional, and [`DayConfig::validate`] is the single place that decides
//! whether a combination is usable.

use serde::{Deserialize, Serialize};

use crate::error::{DayError, Result};

/// Hours in a day; the exclusive upper bound for `end_hour`.
pub const HOURS_PER_DAY: u32 = 24;

/// Default height of one hour row in `Expand` mode, in pixels.
pub const DEFAULT_HOUR_HEIGHT: f64 = 48.0;

/// How the vertical scale is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Fixed hour height; the day grows as tall as it needs.
    #[default]
    Expand,
    /// Hour height is the container height divided by the visible hours.
    FitToContainer,
}

/// How the visible hour window follows the events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Window is exactly the events' hours: first start hour to last end hour + 1.
    #[default]
    Auto,
    /// Configured window, widened when events fall outside it.
    BoundsAdaptive,
    /// Configured window, never changed.
    BoundsStrict,
}

/// Gutter label pattern. `None` hides the gutter entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursFormat {
    None,
    /// `00` .. `23`
    Simple,
    /// `0` .. `23`
    SimpleShort,
    /// `00:00` .. `23:00`
    #[default]
    Complete,
    /// `0:00` .. `23:00`
    CompleteShort,
    /// `00h00` .. `23h00`
    CompleteH,
    /// `0h00` .. `23h00`
    CompleteHShort,
}

impl HoursFormat {
    /// Whether a gutter with hour labels is shown.
    #[inline]
    #[must_use]
    pub const fn shows_gutter(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Label text for `hour`, or `None` when labels are disabled.
    #[must_use]
    pub fn label(self, hour: u32) -> Option<String> {
        match self {
            Self::None => None,
            Self::Simple => Some(format!("{hour:02}")),
            Self::SimpleShort => Some(format!("{hour}")),
            Self::Complete => Some(format!("{hour:02}:00")),
            Self::CompleteShort => Some(format!("{hour}:00")),
            Self::CompleteH => Some(format!("{hour:02}h00")),
            Self::CompleteHShort => Some(format!("{hour}h00")),
        }
    }
}

/// Settings for one day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DayConfig {
    /// First visible hour (inclusive).
    pub start_hour: u32,
    /// Last visible hour (exclusive), at most 24.
    pub end_hour: u32,
    pub display: DisplayMode,
    pub fit: FitMode,
    pub hours: HoursFormat,
    /// Pixels per hour in `Expand` mode.
    pub hour_height: f64,
    /// The gutter takes `width / gutter_divisor` when labels are shown.
    /// At least 2.
    pub gutter_divisor: u32,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: HOURS_PER_DAY,
            display: DisplayMode::default(),
            fit: FitMode::default(),
            hours: HoursFormat::default(),
            hour_height: DEFAULT_HOUR_HEIGHT,
            gutter_divisor: 10,
        }
    }
}

impl DayConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the configured hour window.
    #[must_use]
    pub fn window(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Set the display mode.
    #[must_use]
    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Set the fit mode.
    #[must_use]
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    /// Set the hour label format.
    #[must_use]
    pub fn hours(mut self, hours: HoursFormat) -> Self {
        self.hours = hours;
        self
    }

    /// Set the `Expand` hour height.
    #[must_use]
    pub fn hour_height(mut self, hour_height: f64) -> Self {
        self.hour_height = hour_height;
        self
    }

    /// Reject combinations the driver cannot lay out.
    pub fn validate(&self) -> Result<()> {
        if self.end_hour > HOURS_PER_DAY {
            return Err(DayError::invalid_config(format!(
                "end_hour must be at most {HOURS_PER_DAY}, got {}",
                self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(DayError::invalid_config(format!(
                "start_hour ({}) must be below end_hour ({})",
                self.start_hour, self.end_hour
            )));
        }
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(DayError::invalid_config(format!(
                "hour_height must be finite and greater than zero, got {}",
                self.hour_height
            )));
        }
        // The gutter must leave room for the event columns.
        if self.gutter_divisor < 2 {
            return Err(DayError::invalid_config(format!(
                "gutter_divisor must be at least 2, got {}",
                self.gutter_divisor
            )));
        }
        Ok(())
    }
}
