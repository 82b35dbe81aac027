//! Tests for history store persistence and the day-keyed upsert merge.

mod common;

use common::{date, sample_store};
use pricewatch::{HistoryStore, PricewatchError};
use std::fs;

const WIDGET: &str = "https://shop.example/p/widget";

// ---------------------------------------------------------------------------
// load
// ---------------------------------------------------------------------------

#[test]
fn absent_file_loads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::load(dir.path().join("price_history.json")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn malformed_file_is_a_corrupt_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_history.json");
    fs::write(&path, "{ not json").unwrap();

    let err = HistoryStore::load(&path).unwrap_err();
    assert!(matches!(err, PricewatchError::CorruptStore { .. }));
}

#[test]
fn wrong_shape_is_a_corrupt_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_history.json");
    fs::write(&path, r#"{"p1": {"name": "x", "prices": "oops"}}"#).unwrap();

    let err = HistoryStore::load(&path).unwrap_err();
    assert!(matches!(err, PricewatchError::CorruptStore { .. }));
}

// ---------------------------------------------------------------------------
// save / round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_history.json");

    let mut store = sample_store(&path);
    // Non-ASCII name must survive the round trip.
    store.upsert(
        "https://shop.example/p/2",
        "پاوربانک ۲۰۰۰۰",
        48_000,
        52_000,
        date("2024-01-02"),
    );
    store.save().unwrap();

    let reloaded = HistoryStore::load(&path).unwrap();
    assert_eq!(reloaded, store);
}

#[test]
fn save_replaces_prior_file_and_leaves_no_temp_litter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_history.json");

    let mut store = sample_store(&path);
    store.save().unwrap();
    store.upsert(WIDGET, "Widget", 900, 950, date("2024-01-03"));
    store.save().unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["price_history.json"]);

    let reloaded = HistoryStore::load(&path).unwrap();
    assert_eq!(reloaded.get(WIDGET).unwrap().prices.len(), 3);
}

#[test]
fn failed_save_is_a_store_write_error() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file where the data directory should be makes every save step fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let store = sample_store(blocker.join("price_history.json"));
    let err = store.save().unwrap_err();
    assert!(matches!(err, PricewatchError::StoreWrite { .. }));
}

#[test]
fn save_creates_missing_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("price_history.json");
    sample_store(&path).save().unwrap();
    assert!(path.exists());
}

// ---------------------------------------------------------------------------
// upsert
// ---------------------------------------------------------------------------

#[test]
fn upsert_creates_record_with_one_observation() {
    let mut store = HistoryStore::new("unused.json");
    store.upsert("p1", "Widget", 4800, 5000, date("2024-01-01"));

    let record = store.get("p1").unwrap();
    assert_eq!(record.name, "Widget");
    assert_eq!(record.prices.len(), 1);
    assert_eq!(record.prices[0].lowest_price, 4800);
    assert_eq!(record.prices[0].current_price, 5000);
}

#[test]
fn same_day_upsert_is_idempotent() {
    let mut once = HistoryStore::new("unused.json");
    once.upsert("p1", "Widget", 4800, 5000, date("2024-01-01"));

    let mut twice = HistoryStore::new("unused.json");
    twice.upsert("p1", "Widget", 4800, 5000, date("2024-01-01"));
    twice.upsert("p1", "Widget", 4800, 5000, date("2024-01-01"));

    assert_eq!(once, twice);
}

#[test]
fn same_day_upsert_overwrites_in_place() {
    let path = "unused.json";
    let mut store = sample_store(path);
    store.upsert(WIDGET, "Widget", 800, 900, date("2024-01-01"));

    let record = store.get(WIDGET).unwrap();
    assert_eq!(record.prices.len(), 2);
    // First observation updated in position, not moved to the end.
    assert_eq!(record.prices[0].date, date("2024-01-01"));
    assert_eq!(record.prices[0].lowest_price, 800);
    assert_eq!(record.prices[0].current_price, 900);
    assert_eq!(record.prices[1].date, date("2024-01-02"));
    assert_eq!(record.prices[1].lowest_price, 1200);
}

#[test]
fn new_day_upsert_appends() {
    let mut store = sample_store("unused.json");
    store.upsert(WIDGET, "Widget", 1300, 1350, date("2024-01-03"));

    let record = store.get(WIDGET).unwrap();
    assert_eq!(record.prices.len(), 3);
    assert_eq!(record.prices[2].date, date("2024-01-03"));
}

#[test]
fn upsert_refreshes_name_last_writer_wins() {
    let mut store = sample_store("unused.json");
    store.upsert(WIDGET, "Widget v2", 1300, 1350, date("2024-01-03"));
    assert_eq!(store.get(WIDGET).unwrap().name, "Widget v2");
}
