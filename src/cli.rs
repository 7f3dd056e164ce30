use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Chinese lunisolar calendar converter.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Convert between Gregorian and Chinese lunisolar dates"
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
    /// Convert a Gregorian date into the lunar calendar.
    Convert(ConvertArgs),
    /// Find the Gregorian date of a lunar date.
    Reverse(ReverseArgs),
    /// List the months of a lunar year.
    Year(YearArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date as YYYY-MM-DD.
    pub date: NaiveDate,
}

/// Arguments for the `reverse` subcommand.
#[derive(clap::Args)]
pub struct ReverseArgs {
    /// Lunar year.
    pub year: i32,
    /// Lunar month number, 1-12.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
    /// Lunar day, 1-30.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=30))]
    pub day: u32,
    /// Take the leap month following MONTH.
    #[arg(short, long)]
    pub leap: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year.
    pub year: i32,
}
