#![forbid(unsafe_code)]

//! Core: timestamps, event traits, and pixel geometry.
//!
//! # Role in daygrid
//! `daygrid-core` holds the vocabulary shared by the layout engine
//! (`daygrid-layout`) and the day driver (`daygrid-day`). It has no notion
//! of columns or runs; it only knows what an instant is, what an event
//! exposes, and how a box on screen is described.
//!
//! # Primary responsibilities
//! - **Timestamp**: naive wall-clock instants in epoch milliseconds, plus
//!   free functions for hour-of-day, day-of-year, and friends.
//! - **Interval / CalendarEvent**: the traits callers implement for their
//!   own event payloads.
//! - **Rect**: absolute pixel boxes produced by the driver.

pub mod event;
pub mod geometry;
pub mod time;

pub use event::{CalendarEvent, Interval};
pub use geometry::Rect;
pub use time::Timestamp;
