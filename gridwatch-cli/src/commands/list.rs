//! `gridwatch list` — registered-feeder inventory.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use gridwatch_core::registry;

use super::open_store;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the raw result envelope as machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, store_path: &Path) -> Result<()> {
        let store = open_store(store_path)?;
        let result = registry::get_registered_feeders(&store);

        if self.json {
            let out = serde_json::to_string_pretty(&result)
                .context("failed to serialize feeder list")?;
            println!("{out}");
            return Ok(());
        }

        let feeders = result
            .report()
            .and_then(|r| r.as_array())
            .cloned()
            .unwrap_or_default();
        if feeders.is_empty() {
            println!("No feeders registered.");
            println!("Run: gridwatch register <id> <name> <location>");
            return Ok(());
        }

        for feeder in &feeders {
            let id = feeder["feeder_id"].as_str().unwrap_or("?");
            let name = feeder["name"].as_str().unwrap_or("?");
            let location = feeder["location"].as_str().unwrap_or("?");
            match feeder.get("configuration") {
                Some(config) => println!("  {id}  {name} ({location})  config: {config}"),
                None => println!("  {id}  {name} ({location})"),
            }
        }
        Ok(())
    }
}
