mod calendar;
mod dashboard;
mod logging;
mod text;
mod tui;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use symera_core::{
    parse_calendar_date, parse_month, CalendarUseCase, Clock, Config, DashboardUseCase,
    FileSnapshotRepository, FixedClock, SystemClock,
};

#[derive(Parser)]
#[command(name = "symera")]
#[command(about = "Event planning calendar and dashboard", long_about = None)]
struct Cli {
    /// Config file (default: ~/.symera/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Snapshot JSON exported from the data API
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show a month calendar with per-day item counts
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current one
        #[arg(long)]
        month: Option<String>,
    },
    /// List the events and tasks on one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Print the dashboard summary
    Dashboard,
    /// Open the interactive dashboard
    Tui,
}

/// Date arguments go through the same lenient parser the core uses for data.
fn parse_date_arg(raw: &str, what: &str) -> Result<NaiveDate> {
    parse_calendar_date(raw).ok_or_else(|| anyhow!("Invalid {} date: {}", what, raw))
}

fn resolve_clock(today: Option<&str>) -> Result<FixedClock> {
    match today {
        Some(raw) => Ok(FixedClock::at_date(parse_date_arg(raw, "--today")?)),
        // Freeze "now" once so every view in this run agrees on today
        None => Ok(FixedClock(SystemClock.now())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    if let Err(e) = logging::init(level) {
        eprintln!("Warning: {}", e);
    }

    let data_path = match cli.data {
        Some(p) => p,
        None => config.data_path()?,
    };
    let repo = FileSnapshotRepository::new(&data_path)?;
    let clock = resolve_clock(cli.today.as_deref())?;
    log::debug!("using snapshot {:?}, today is {}", repo.path(), clock.today());

    match cli.command {
        Some(Commands::Calendar { month }) => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => symera_core::time::month_of(clock.today()),
            };
            let calendar = CalendarUseCase::load(&repo, config.week_start)?;
            calendar::show_month(&calendar, year, month, clock.today())?;
        }
        Some(Commands::Day { date }) => {
            let day = parse_date_arg(&date, "day")?;
            let calendar = CalendarUseCase::load(&repo, config.week_start)?;
            calendar::show_day(&calendar.day(day));
        }
        Some(Commands::Tui) => {
            tui::run(&repo, &clock, &config)?;
        }
        Some(Commands::Dashboard) | None => {
            let summary = DashboardUseCase::new(&repo, &clock, config.upcoming_limit).get_summary()?;
            dashboard::show_summary(&summary, clock.now());
        }
    }
    Ok(())
}
