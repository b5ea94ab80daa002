//! `gridwatch weather <city>` and `gridwatch time <city>` — single-city
//! lookup stubs, passed straight through from the core.

use anyhow::{bail, Result};
use clap::Args;

use gridwatch_core::{lookup, ToolResult};

#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// City name (only "new york" is supported).
    pub city: String,
}

impl WeatherArgs {
    pub fn run(self) -> Result<()> {
        print_report(lookup::get_weather(&self.city))
    }
}

#[derive(Args, Debug)]
pub struct TimeArgs {
    /// City name (only "new york" is supported).
    pub city: String,
}

impl TimeArgs {
    pub fn run(self) -> Result<()> {
        print_report(lookup::get_current_time(&self.city))
    }
}

fn print_report(result: ToolResult) -> Result<()> {
    match result.report() {
        Some(report) => {
            println!("{}", report.as_str().unwrap_or_default());
            Ok(())
        }
        None => bail!("{}", result.error_message().unwrap_or("lookup failed")),
    }
}
