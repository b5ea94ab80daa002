//! GridWatch — grid feeder registry CLI.
//!
//! # Usage
//!
//! ```text
//! gridwatch register <id> <name> <location> [--config <json>]
//! gridwatch list [--json]
//! gridwatch health <id>
//! gridwatch alerts <id>
//! gridwatch weather <city>
//! gridwatch time <city>
//! ```
//!
//! The backing store defaults to `~/.gridwatch/feeders.json`; override with
//! `--store <path>` or `GRIDWATCH_STORE`.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    alerts::AlertsArgs,
    health::HealthArgs,
    list::ListArgs,
    lookup::{TimeArgs, WeatherArgs},
    register::RegisterArgs,
};
use gridwatch_core::store;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "gridwatch",
    version,
    about = "Register and monitor grid feeders backed by a flat JSON store",
    long_about = None,
)]
struct Cli {
    /// Path of the backing JSON store file.
    #[arg(long, global = true, env = "GRIDWATCH_STORE", value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new feeder.
    Register(RegisterArgs),

    /// List all registered feeders.
    List(ListArgs),

    /// Show the health status of a feeder.
    Health(HealthArgs),

    /// Show the alerts recorded for a feeder.
    Alerts(AlertsArgs),

    /// Show the weather report for a city.
    Weather(WeatherArgs),

    /// Show the current local time in a city.
    Time(TimeArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store_path = match cli.store {
        Some(path) => path,
        None => store::default_store_path()?,
    };

    match cli.command {
        Commands::Register(args) => args.run(&store_path),
        Commands::List(args) => args.run(&store_path),
        Commands::Health(args) => args.run(&store_path),
        Commands::Alerts(args) => args.run(&store_path),
        Commands::Weather(args) => args.run(),
        Commands::Time(args) => args.run(),
    }
}
