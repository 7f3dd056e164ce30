mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use nongli::chinese::table::LunarYearInfo;
use nongli::chinese::{LunarDate, Month, fmt, sexagenary};
use tracing::info;

use crate::cli::{Cli, Command, ConvertArgs, ReverseArgs, YearArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert(args),
        Command::Reverse(args) => reverse(args),
        Command::Year(args) => year(args),
    }
}

fn convert(args: ConvertArgs) -> Result<()> {
    let date = LunarDate::try_from(args.date)
        .with_context(|| format!("cannot convert {}", args.date))?;
    info!(date = %args.date, lunar = %date, "converted");
    print_report(&date);
    Ok(())
}

fn reverse(args: ReverseArgs) -> Result<()> {
    let month = if args.leap {
        Month::Leap(args.month)
    } else {
        Month::Common(args.month)
    };
    let date = LunarDate::from_lunar(args.year, month, args.day).with_context(|| {
        format!(
            "no lunar date {}年{}{}",
            args.year,
            fmt::month(month),
            fmt::day(args.day)
        )
    })?;
    info!(lunar = %date, date = %date.date().iso_gregorian(), "resolved");
    print_report(&date);
    Ok(())
}

fn year(args: YearArgs) -> Result<()> {
    let info = LunarYearInfo::get(args.year).context("cannot list lunar year")?;
    let pillar = sexagenary::year_pillar(info.year);
    println!(
        "{}年 {}年 ({} days)",
        fmt::year(info.year),
        pillar,
        info.total_days
    );
    let mut first = LunarDate::from_lunar(info.year, Month::Common(1), 1)?.date();
    for slot in &info.months {
        println!(
            "{:<6}{:>3} days  {}",
            fmt::month(slot.month),
            slot.days,
            first.iso_gregorian()
        );
        first = first + slot.days as i32;
    }
    Ok(())
}

fn print_report(date: &LunarDate) {
    let (solar_year, solar_month) = sexagenary::solar_month(date.date());
    let jie = fmt::solar_term(solar_month * 2 - 1);
    println!("公历  {}", date.date().iso_gregorian());
    println!("农历  {}", date);
    println!(
        "干支  {}年 {}月 {}日",
        date.year_pillar(),
        date.month_pillar(),
        date.day_pillar()
    );
    println!("生肖  {} ({})", date.zodiac().name(), date.zodiac());
    println!("节令  {} {}后", solar_year, jie);
    if let Some(festival) = date.festival() {
        println!("节日  {}", festival);
    }
}
