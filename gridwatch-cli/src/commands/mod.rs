//! One module per subcommand, plus shared store-opening glue.

pub mod alerts;
pub mod health;
pub mod list;
pub mod lookup;
pub mod register;

use std::path::Path;

use anyhow::{Context, Result};

use gridwatch_core::FeederStore;

/// Open the backing store, starting empty if the file is corrupt.
///
/// Corruption is a warning, not a failure — the registry must keep working
/// even after a bad write from an earlier tool.
pub fn open_store(path: &Path) -> Result<FeederStore> {
    FeederStore::open_or_reset(path)
        .with_context(|| format!("failed to open feeder store at {}", path.display()))
}
