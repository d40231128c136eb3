#![forbid(unsafe_code)]

//! `daygrid`: lay out calendar events from the command line.
//!
//! Events come in as a JSON array, the layout goes out as JSON or as a
//! plain-text table. Both subcommands run the same library code a host UI
//! would call, so the binary doubles as an end-to-end harness.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use cli::run_from_env;
pub use error::{CliError, Result};
