#![forbid(unsafe_code)]

//! Single-day driver around the column packer.
//!
//! # Role in daygrid
//! `daygrid-layout` only knows fractions. This crate decides which hours a
//! day shows, keeps all-day events off the grid, runs the packer on what
//! remains, and turns the result into absolute pixel boxes plus hour labels
//! for the gutter. Nothing here draws; the host UI consumes [`DayLayout`]
//! and builds its own views from it.

pub mod config;
pub mod day;
pub mod error;
pub mod window;

pub use config::{DayConfig, DisplayMode, FitMode, HoursFormat};
pub use day::{DayContent, DayLayout, EventBox, HourLabel, lay_out_day};
pub use error::{DayError, Result};
pub use window::HourWindow;
