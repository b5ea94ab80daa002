//! JSON-file-backed key-value store for feeder records.
//!
//! # Storage layout
//!
//! One JSON object in a single file (default `~/.gridwatch/feeders.json`),
//! pretty-printed with 4-space indentation. Three key families:
//!
//! ```text
//! feeder:<id>   → serialized Feeder record
//! all_feeders   → array of known feeder id strings (append order)
//! alerts:<id>   → array of alert records (read-only here)
//! ```
//!
//! The whole map lives in memory and is re-serialized on every [`save`].
//! Writes go through a `.tmp` sibling then rename, so a crash mid-write
//! never corrupts the existing file. Single-process, single-threaded use
//! only: there is no locking, and concurrent writers would race with the
//! last save winning.
//!
//! [`save`]: FeederStore::save

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;
use serde_json::Value;

use crate::error::{io_err, StoreError};
use crate::types::FeederId;

/// Key under which the index of all feeder ids is stored.
pub const ALL_FEEDERS_KEY: &str = "all_feeders";

/// `feeder:<id>` — key for a feeder's record.
pub fn feeder_key(id: &FeederId) -> String {
    format!("feeder:{id}")
}

/// `alerts:<id>` — key for a feeder's alert list.
pub fn alerts_key(id: &FeederId) -> String {
    format!("alerts:{id}")
}

/// Default backing file: `<home>/.gridwatch/feeders.json`.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
    Ok(home.join(".gridwatch").join("feeders.json"))
}

/// In-memory mirror of the backing JSON file.
///
/// Construct once via [`open`](Self::open) or
/// [`open_or_reset`](Self::open_or_reset) and pass by reference to the
/// registry operations. `BTreeMap` keeps the file output deterministic.
#[derive(Debug)]
pub struct FeederStore {
    path: PathBuf,
    map: BTreeMap<String, Value>,
}

impl FeederStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable file is an
    /// [`StoreError::Io`]; a readable file with invalid JSON is a
    /// [`StoreError::Parse`] — the caller decides whether to reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                map: BTreeMap::new(),
            });
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        let map = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, map })
    }

    /// Open the store at `path`, starting empty if the file is corrupt.
    ///
    /// The corrupt file is left on disk untouched until the next save.
    /// I/O errors still propagate.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => Ok(store),
            Err(StoreError::Parse { path, source }) => {
                warn!("store file at {} is corrupt ({source}); starting empty", path.display());
                Ok(Self {
                    path,
                    map: BTreeMap::new(),
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Atomically persist the whole map to the backing file.
    ///
    /// Write flow: serialize (4-space pretty) → `.tmp` sibling → `rename`.
    /// The `.tmp` lives in the same directory as the target, so the rename
    /// never crosses filesystems. Creates the parent directory if missing.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
            }
        }

        // serde_json's default pretty printer indents with 2 spaces; the
        // on-disk format uses 4.
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.map.serialize(&mut ser)?;
        buf.push(b'\n');

        let tmp = tmp_path(&self.path);
        std::fs::write(&tmp, &buf).map_err(|e| io_err(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| io_err(&self.path, e))?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
