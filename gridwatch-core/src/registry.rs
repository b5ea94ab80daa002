//! Registry operations over a [`FeederStore`].
//!
//! Each operation composes store reads/writes into one logical action and
//! returns the uniform [`ToolResult`] envelope. Expected failures (unknown
//! feeder, duplicate id, failed persist) come back as the error arm of the
//! envelope; nothing panics or raises past this boundary on valid arguments.

use log::{error, warn};
use serde_json::{Map, Value};

use crate::store::{alerts_key, feeder_key, FeederStore, ALL_FEEDERS_KEY};
use crate::types::{Feeder, FeederId, ToolResult};

/// Placeholder health report. Real health computation is a collaborator
/// concern that does not exist yet.
const HEALTH_REPORT: &str = "Operational and healthy.";

// ---------------------------------------------------------------------------
// 1. Register
// ---------------------------------------------------------------------------

/// Register a new feeder and persist it.
///
/// Rejects the id if either the `feeder:<id>` record or an `all_feeders`
/// index entry already exists. The record write and the index append happen
/// as one in-memory mutation followed by a single save, so the pair is
/// atomic on disk: a crash leaves either both or neither.
///
/// On success the report carries the full feeder record.
pub fn register_feeder(
    store: &mut FeederStore,
    id: FeederId,
    name: impl Into<String>,
    location: impl Into<String>,
    configuration: Option<Map<String, Value>>,
) -> ToolResult {
    if store.contains(&feeder_key(&id)) || index_ids(store).iter().any(|known| *known == id.0) {
        return ToolResult::error(format!("Feeder ID '{id}' already exists."));
    }

    let feeder = Feeder::new(id.clone(), name, location, configuration);
    let record = feeder.to_record();

    let mut ids = index_ids(store);
    ids.push(id.0.clone());

    store.set(feeder_key(&id), record.clone());
    store.set(ALL_FEEDERS_KEY, Value::from(ids));

    if let Err(e) = store.save() {
        error!("failed to persist registration of '{id}': {e}");
        return ToolResult::error(e.to_string());
    }
    ToolResult::success(record)
}

// ---------------------------------------------------------------------------
// 2. List
// ---------------------------------------------------------------------------

/// List all registered feeders, in registration order.
///
/// Always succeeds. An absent index yields an empty list; index ids with no
/// backing record (or an undecodable one) are skipped.
pub fn get_registered_feeders(store: &FeederStore) -> ToolResult {
    let mut feeders: Vec<Value> = Vec::new();
    for id in index_ids(store) {
        let id = FeederId(id);
        let Some(record) = store.get(&feeder_key(&id)) else {
            continue;
        };
        match Feeder::from_record(record) {
            Ok(feeder) => feeders.push(feeder.to_record()),
            Err(e) => warn!("skipping undecodable record for feeder '{id}': {e}"),
        }
    }
    ToolResult::success(feeders)
}

// ---------------------------------------------------------------------------
// 3. Health
// ---------------------------------------------------------------------------

/// Report the health status of a registered feeder.
pub fn get_feeder_health(store: &FeederStore, id: &FeederId) -> ToolResult {
    if !store.contains(&feeder_key(id)) {
        return not_found(id);
    }
    ToolResult::success(HEALTH_REPORT)
}

// ---------------------------------------------------------------------------
// 4. Alerts
// ---------------------------------------------------------------------------

/// List the alerts recorded for a registered feeder.
///
/// No operation in this registry writes `alerts:<id>`; the list is empty
/// unless something external populated it.
pub fn get_feeder_alerts(store: &FeederStore, id: &FeederId) -> ToolResult {
    if !store.contains(&feeder_key(id)) {
        return not_found(id);
    }
    let alerts = match store.get(&alerts_key(id)) {
        Some(Value::Array(alerts)) => alerts.clone(),
        Some(other) => {
            warn!("alerts entry for feeder '{id}' is not a list: {other}");
            vec![]
        }
        None => vec![],
    };
    ToolResult::success(alerts)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn not_found(id: &FeederId) -> ToolResult {
    ToolResult::error(format!("Feeder ID '{id}' not found."))
}

/// The `all_feeders` index as plain strings. Absent index → empty; entries
/// that are not strings are ignored.
fn index_ids(store: &FeederStore) -> Vec<String> {
    match store.get(ALL_FEEDERS_KEY) {
        Some(Value::Array(ids)) => ids
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect(),
        _ => vec![],
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
