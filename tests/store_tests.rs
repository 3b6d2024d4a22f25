mod common;
use common::setup_test_store;

use chrono::NaiveDate;
use damagelog::errors::AppError;
use damagelog::export::Exporter;
use damagelog::models::{DamageReport, DamageType, StorageZone, Team};
use damagelog::store::RecordStore;
use std::fs;

fn report(sku: &str, product: &str, notes: &str) -> DamageReport {
    DamageReport {
        date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        sku: sku.to_string(),
        product: product.to_string(),
        quantity: 2,
        damage_type: DamageType::BrokenPackaging,
        zone: StorageZone::LoadingDock,
        team: Team::Receiving,
        notes: notes.to_string(),
    }
}

#[test]
fn test_ensure_initialized_writes_header_only_file() {
    let store_path = setup_test_store("ensure_initialized_writes_header_only_file");
    let store = RecordStore::new(&store_path);

    store.ensure_initialized().expect("init store");

    let content = fs::read_to_string(&store_path).expect("read store");
    assert_eq!(
        content,
        "Date,SKU,Product Name,Quantity,Damage Type,Storage Zone,Team,Notes\n"
    );
    assert!(store.load().expect("load store").is_empty());
}

#[test]
fn test_ensure_initialized_is_idempotent() {
    let store_path = setup_test_store("ensure_initialized_is_idempotent");
    let store = RecordStore::new(&store_path);

    store.ensure_initialized().expect("init store");
    store.append(&report("ABC123", "Milk", "")).expect("append");

    // A second init must not clobber existing rows.
    store.ensure_initialized().expect("re-init store");
    assert_eq!(store.load().expect("load store").len(), 1);
}

#[test]
fn test_append_preserves_order_and_content() {
    let store_path = setup_test_store("append_preserves_order_and_content");
    let store = RecordStore::new(&store_path);
    store.ensure_initialized().expect("init store");

    let first = report("ABC123", "Milk", "");
    let second = report("XYZ777", "Eggs", "dropped pallet");
    store.append(&first).expect("append first");
    store.append(&second).expect("append second");

    let rows = store.load().expect("load store");
    assert_eq!(rows, vec![first, second]);
}

#[test]
fn test_load_missing_file_is_storage_error() {
    let store_path = setup_test_store("load_missing_file_is_storage_error");
    let store = RecordStore::new(&store_path);

    assert!(matches!(store.load(), Err(AppError::Storage(_))));
}

#[test]
fn test_enum_labels_and_quoting_round_trip() {
    let store_path = setup_test_store("enum_labels_and_quoting_round_trip");
    let store = RecordStore::new(&store_path);
    store.ensure_initialized().expect("init store");

    let row = report("ABC123", "Milk, whole (1 gal)", "wet, crushed corner");
    store.append(&row).expect("append");

    let content = fs::read_to_string(&store_path).expect("read store");
    assert!(content.contains("Broken Packaging"));
    assert!(content.contains("Loading Dock"));
    assert!(content.contains("\"Milk, whole (1 gal)\""));
    assert!(content.contains("\"wet, crushed corner\""));

    assert_eq!(store.load().expect("load store"), vec![row]);
}

#[test]
fn test_exporter_bytes_match_persisted_format() {
    let store_path = setup_test_store("exporter_bytes_match_persisted_format");
    let store = RecordStore::new(&store_path);
    store.ensure_initialized().expect("init store");
    store.append(&report("ABC123", "Milk", "")).expect("append");
    store.append(&report("XYZ777", "Eggs", "dropped pallet")).expect("append");

    let rows = store.load().expect("load store");
    let bytes = Exporter::to_bytes(&rows).expect("encode table");

    // Identical serialization as the store's own file.
    let persisted = fs::read(&store_path).expect("read store");
    assert_eq!(bytes, persisted);

    // And the payload loads back unchanged.
    let out_path = setup_test_store("exporter_bytes_match_persisted_format_out");
    fs::write(&out_path, &bytes).expect("write payload");
    assert_eq!(RecordStore::new(&out_path).load().expect("load payload"), rows);
}

#[test]
fn test_exporter_empty_table_is_header_only() {
    let bytes = Exporter::to_bytes(&[]).expect("encode empty table");
    assert_eq!(
        String::from_utf8(bytes).expect("utf-8 payload"),
        "Date,SKU,Product Name,Quantity,Damage Type,Storage Zone,Team,Notes\n"
    );
}
