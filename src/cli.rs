use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar data builder.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Merge configured events, iCalendar imports and moon phases for one year"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Merge all sources for one year and write the day annotations as JSON.
    Build(BuildArgs),
    /// Print the moon phase dates of a year or a month.
    Moon(MoonArgs),
    /// Print the localized month and weekday names.
    Names(NamesArgs),
}

/// Arguments for the `build` subcommand.
#[derive(clap::Args)]
pub struct BuildArgs {
    /// Path to TOML configuration file [default: almanac.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Override locale from config (e.g. en_US, de_DE).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Override weekday name cutoff from config (0 keeps full names).
    #[arg(long)]
    pub cutoff: Option<usize>,

    /// Override XML event configuration path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Override iCalendar file path from config.
    #[arg(short, long)]
    pub ics: Option<PathBuf>,

    /// Override output JSON path from config; stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep the scratch directory after the run.
    #[arg(long)]
    pub keep_scratch: bool,
}

/// Arguments for the `moon` subcommand.
#[derive(clap::Args)]
pub struct MoonArgs {
    /// Year to compute.
    #[arg(short, long)]
    pub year: i32,

    /// Restrict output to one month (1-12).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,
}

/// Arguments for the `names` subcommand.
#[derive(clap::Args)]
pub struct NamesArgs {
    /// Locale code (e.g. en_US, de_DE).
    #[arg(short, long, default_value = "en_US")]
    pub locale: String,

    /// Cut weekday names to this many characters (0 keeps full names).
    #[arg(short, long, default_value_t = 0)]
    pub cutoff: usize,
}
