//! Store error-message, corruption, and atomic-write-safety tests.
//! The backing file is always tempdir-isolated; nothing touches `$HOME`.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use std::fs;

use gridwatch_core::{
    registry,
    store::{FeederStore, ALL_FEEDERS_KEY},
    FeederId, StoreError,
};

// ---------------------------------------------------------------------------
// 1. Corruption and load errors
// ---------------------------------------------------------------------------

#[test]
fn open_corrupt_file_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");
    file.write_str("{ \"feeder:f1\": [unclosed").expect("write");

    let err = FeederStore::open(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("feeders.json"), "must contain file path, got: {msg}");
}

#[test]
fn open_wrong_toplevel_type_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");
    file.write_str("[\"a list, not an object\"]").expect("write");

    let err = FeederStore::open(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
}

#[test]
fn corrupt_file_on_startup_degrades_to_empty_registry() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");
    file.write_str("%%% not json %%%").expect("write");

    let store = FeederStore::open_or_reset(file.path()).expect("open_or_reset");
    let result = registry::get_registered_feeders(&store);
    assert!(result.is_success());
    assert_eq!(result.report().unwrap().as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// 2. Atomic write safety
// ---------------------------------------------------------------------------

#[test]
fn registration_writes_the_backing_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");

    let mut store = FeederStore::open(file.path()).expect("open");
    registry::register_feeder(&mut store, FeederId::from("f1"), "A", "X", None);

    file.assert(predicate::path::exists());
    dir.child("feeders.json.tmp")
        .assert(predicate::path::missing());
}

#[test]
fn mid_write_crash_leaves_original_intact() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");

    let mut store = FeederStore::open(file.path()).expect("open");
    registry::register_feeder(&mut store, FeederId::from("f1"), "A", "X", None);
    let original = fs::read(file.path()).expect("read original");

    // Simulate crash: .tmp written but process died before rename.
    dir.child("feeders.json.tmp")
        .write_str("CRASH - INCOMPLETE WRITE")
        .expect("write crash tmp");

    let reopened = FeederStore::open(file.path()).expect("reopen");
    assert!(reopened.contains("feeder:f1"));
    assert_eq!(fs::read(file.path()).expect("reread"), original);
}

#[test]
fn record_and_index_land_in_the_same_write() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");

    let mut store = FeederStore::open(file.path()).expect("open");
    registry::register_feeder(&mut store, FeederId::from("f1"), "A", "X", None);

    // One registration, one file: the on-disk state already holds both the
    // record and the index entry. There is no intermediate state where only
    // one of the pair exists.
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(file.path()).expect("read")).expect("json");
    assert!(on_disk.get("feeder:f1").is_some());
    assert_eq!(on_disk[ALL_FEEDERS_KEY], serde_json::json!(["f1"]));
}

// ---------------------------------------------------------------------------
// 3. Persistence across reopen
// ---------------------------------------------------------------------------

#[test]
fn registered_feeder_survives_reopen() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("feeders.json");

    let mut store = FeederStore::open(file.path()).expect("open");
    registry::register_feeder(&mut store, FeederId::from("f1"), "Feeder One", "Loc A", None);
    drop(store);

    let reopened = FeederStore::open(file.path()).expect("reopen");
    let result = registry::get_registered_feeders(&reopened);
    let report = result.report().unwrap().as_array().unwrap().clone();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["name"], serde_json::json!("Feeder One"));
}

#[test]
fn home_not_found_error_message() {
    assert!(StoreError::HomeNotFound.to_string().contains("home directory"));
}
