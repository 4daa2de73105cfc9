use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lich Viet traditional almanac.
#[derive(Parser)]
#[command(
    name = "lichviet",
    version,
    about = "Vietnamese traditional almanac (Can-Chi) engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "lichviet.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the full almanac card for a solar date and its lunar date.
    Show(ShowArgs),
    /// Show the solar-only day details (pillar, element, hours, conflicts).
    Day(DayArgs),
    /// Show the year pillar of a lunar year.
    Year(YearArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Solar date as YYYY-MM-DD; defaults to today (UTC+7).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Lunar date for the solar date, as D/M/YYYY (output of a solar-to-lunar
    /// converter).
    #[arg(short, long)]
    pub lunar: String,

    /// Mark the lunar month as a leap month.
    #[arg(long)]
    pub leap: bool,

    /// Emit pretty JSON regardless of the configured format.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Solar date as YYYY-MM-DD; defaults to today (UTC+7).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Navigate this many days from the given date (may be negative).
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Lunar month of the day; adds the auspicious-day verdict.
    #[arg(short = 'm', long)]
    pub lunar_month: Option<u8>,

    /// Emit pretty JSON regardless of the configured format.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year.
    pub year: i32,

    /// Lunar month; adds the month pillar.
    #[arg(short, long)]
    pub month: Option<u8>,
}
