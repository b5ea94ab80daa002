//! `gridwatch health <id>`

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use gridwatch_core::{registry, FeederId};

use super::open_store;

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Feeder identifier to check.
    pub id: String,
}

impl HealthArgs {
    pub fn run(self, store_path: &Path) -> Result<()> {
        let store = open_store(store_path)?;
        let result = registry::get_feeder_health(&store, &FeederId::from(self.id));
        match result.report() {
            Some(report) => {
                println!("{}", report.as_str().unwrap_or_default());
                Ok(())
            }
            None => bail!("{}", result.error_message().unwrap_or("health check failed")),
        }
    }
}
