use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use daygrid_day::lay_out_day;
use daygrid_layout::organize_with_stats;

use crate::error::{CliError, Result};
use crate::input::{read_config, read_events};
use crate::output::{OutputFormat, write_day, write_organize};

#[derive(Debug, Parser)]
#[command(
    name = "daygrid",
    about = "Lay out overlapping calendar events in columns",
    version
)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the column packer only and print fractions and pixel offsets.
    Organize(OrganizeArgs),

    /// Lay out a whole day: hour window, all-day strip, boxes, and labels.
    Day(DayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct OrganizeArgs {
    /// Events JSON file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub events: String,

    /// Layout width in pixels.
    #[arg(long)]
    pub width: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct DayArgs {
    /// Events JSON file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub events: String,

    /// Day column width in pixels, gutter included.
    #[arg(long)]
    pub width: f64,

    /// Container height in pixels; used by `fit_to_container`.
    #[arg(long, default_value_t = 0.0)]
    pub height: f64,

    /// Day configuration JSON file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

/// Dispatch `cli`, writing the result to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Organize(args) => run_organize(&args, out),
        Commands::Day(args) => run_day(&args, out),
    }
}

fn run_organize(args: &OrganizeArgs, out: &mut impl Write) -> Result<()> {
    check_width(args.width)?;
    let events = read_events(&args.events)?;
    let (positioned, stats) = organize_with_stats(events, args.width)?;
    tracing::info!(
        events = stats.events,
        runs = stats.runs,
        max_columns = stats.max_columns,
        "organized"
    );
    write_organize(out, &positioned, stats, args.format)
}

fn run_day(args: &DayArgs, out: &mut impl Write) -> Result<()> {
    check_width(args.width)?;
    let config = read_config(args.config.as_deref())?;
    let events = read_events(&args.events)?;
    let layout = lay_out_day(events, &config, args.width, args.height)?;
    tracing::info!(
        start = layout.window.start,
        end = layout.window.end,
        timed = layout.timed.len(),
        all_day = layout.all_day.len(),
        hidden = layout.outside_window.len(),
        "day laid out"
    );
    write_day(out, &layout, args.format)
}

fn check_width(width: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(CliError::invalid(format!(
            "--width must be a positive number of pixels, got {width}"
        )))
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_day_flags() {
        let cli = Cli::try_parse_from([
            "daygrid", "day", "--events", "day.json", "--width", "640", "--height", "480",
            "--format", "table", "-v",
        ])
        .expect("valid flags");
        assert!(cli.verbose);
        let Commands::Day(args) = cli.command else {
            panic!("expected day subcommand");
        };
        assert_eq!(args.events, "day.json");
        assert_eq!(args.width, 640.0);
        assert_eq!(args.height, 480.0);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.config.is_none());
    }

    #[test]
    fn organize_defaults_to_stdin_and_json() {
        let cli = Cli::try_parse_from(["daygrid", "organize", "--width", "300"])
            .expect("valid flags");
        let Commands::Organize(args) = cli.command else {
            panic!("expected organize subcommand");
        };
        assert_eq!(args.events, "-");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn zero_width_is_an_argument_error() {
        let cli = Cli {
            verbose: false,
            command: Commands::Organize(OrganizeArgs {
                events: "unused.json".to_string(),
                width: 0.0,
                format: OutputFormat::Json,
            }),
        };
        let err = run(cli, &mut Vec::new()).expect_err("zero width");
        assert_eq!(err.exit_code(), 2);
    }
}
