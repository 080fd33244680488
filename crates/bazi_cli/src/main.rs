mod config;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bazi_core::moment::check_range;
use bazi_core::{CivilMoment, Field, Pillar, day_pillar, to_julian_day};
use bazi_rs::{BaziResponse, Calculator};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use crate::config::BaziConfig;

#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars (Bazi) calculator")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to TOML configuration file (year policy, month-stem rule).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a Gregorian date and hour
    #[command(allow_negative_numbers = true)]
    Pillars {
        /// Gregorian year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month (1-31)
        day: u32,
        /// Hour (0-23)
        hour: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Julian Day (00:00) and day pillar of a Gregorian date
    #[command(allow_negative_numbers = true)]
    JulianDay {
        /// Gregorian year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },
    /// Pillar at a position of the 60-term cycle (0 = 甲子)
    #[command(allow_negative_numbers = true)]
    Sexagenary {
        /// Cycle index; reduced modulo 60
        index: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let calculator = load_calculator(cli.config.as_ref())?;

    match cli.command {
        Commands::Pillars {
            year,
            month,
            day,
            hour,
            json,
        } => {
            let moment = CivilMoment::new(year, month, day, hour)?;
            info!(%moment, rule = ?calculator.rule, "computing four pillars");
            let pillars = calculator.calculate_moment(&moment)?;

            if json {
                let response = BaziResponse::from(&pillars).with_timestamp(Utc::now());
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Four Pillars (Bazi):");
                println!("Year Pillar: {}", pillars.year);
                println!("Month Pillar: {}", pillars.month);
                println!("Day Pillar: {}", pillars.day);
                println!("Hour Pillar: {}", pillars.hour);
            }
        }

        Commands::JulianDay { year, month, day } => {
            check_range(Field::Month, month as i64, 1, 12)?;
            let jd = to_julian_day(year, month, day);
            println!("JD {jd:.1} (day pillar {})", day_pillar(year, month, day));
        }

        Commands::Sexagenary { index } => {
            let pillar = Pillar::from_cycle_index(index);
            let position = index.rem_euclid(60);
            println!("{pillar} (index {position} in 60-term cycle)");
        }
    }

    Ok(())
}

fn load_calculator(path: Option<&PathBuf>) -> Result<Calculator> {
    match path {
        Some(path) => {
            let cfg = BaziConfig::load(path)?;
            info!(path = %path.display(), ?cfg, "loaded config");
            Ok(cfg.calculator(Utc::now()))
        }
        None => Ok(Calculator::default()),
    }
}
