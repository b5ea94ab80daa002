//! `gridwatch alerts <id>`

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use gridwatch_core::{registry, FeederId};

use super::open_store;

#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Feeder identifier to check.
    pub id: String,
}

impl AlertsArgs {
    pub fn run(self, store_path: &Path) -> Result<()> {
        let store = open_store(store_path)?;
        let result = registry::get_feeder_alerts(&store, &FeederId::from(self.id));
        match result.report() {
            Some(alerts) => {
                let list = alerts.as_array().cloned().unwrap_or_default();
                if list.is_empty() {
                    println!("No alerts.");
                    return Ok(());
                }
                for alert in &list {
                    let line = serde_json::to_string(alert)
                        .context("failed to serialize alert")?;
                    println!("  {line}");
                }
                Ok(())
            }
            None => bail!("{}", result.error_message().unwrap_or("alert lookup failed")),
        }
    }
}
