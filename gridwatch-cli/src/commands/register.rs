//! `gridwatch register <id> <name> <location> [--config <json>]`

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::{Map, Value};

use gridwatch_core::{registry, FeederId};

use super::open_store;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Unique feeder identifier (e.g. "f1").
    pub id: String,

    /// Human-readable feeder name.
    pub name: String,

    /// Feeder location.
    pub location: String,

    /// Configuration as a JSON object, e.g. '{"rate": 5}'.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<String>,
}

impl RegisterArgs {
    pub fn run(self, store_path: &Path) -> Result<()> {
        let configuration = self.config.as_deref().map(parse_config).transpose()?;

        let mut store = open_store(store_path)?;
        let result = registry::register_feeder(
            &mut store,
            FeederId::from(self.id),
            self.name,
            self.location,
            configuration,
        );

        match result.report() {
            Some(record) => {
                println!(
                    "{} Registered feeder '{}'",
                    "✓".green(),
                    record["feeder_id"].as_str().unwrap_or_default()
                );
                Ok(())
            }
            None => bail!("{}", result.error_message().unwrap_or("registration failed")),
        }
    }
}

fn parse_config(raw: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(raw).context("--config is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("--config must be a JSON object, e.g. '{{\"rate\": 5}}'"),
    }
}
