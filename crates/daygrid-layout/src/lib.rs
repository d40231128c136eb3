#![forbid(unsafe_code)]

//! Column packing for overlapping calendar events.
//!
//! Given events with arbitrary overlaps, [`organize`] assigns each one a
//! column and a column span so that colliding events share the available
//! width while events that never meet reuse the same column.
//!
//! ```
//! use daygrid_core::Timestamp;
//! use daygrid_layout::organize;
//!
//! let at = |h, m| Timestamp::ymd_hms(2020, 1, 1, h, m, 0).unwrap();
//! let events = vec![at(10, 0)..at(11, 0), at(10, 0)..at(11, 0), at(10, 20)..at(10, 40)];
//!
//! let laid_out = organize(events, 900.0).unwrap();
//! assert_eq!(laid_out[2].placement.column, 2);
//! assert_eq!(laid_out[2].x, 600.0);
//! ```

pub mod error;
pub mod interval;
pub mod packer;

pub use error::{LayoutError, Result};
pub use interval::{TimeSpan, intersects};
pub use packer::{LayoutStats, Placement, Positioned, organize, organize_with_stats};
