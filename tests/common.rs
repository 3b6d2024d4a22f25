#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dmg() -> Command {
    cargo_bin_cmd!("damagelog")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_damagelog.csv", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Submit one report via the CLI
pub fn submit(
    store_path: &str,
    date: &str,
    sku: &str,
    product: &str,
    qty: &str,
    damage: &str,
    zone: &str,
    team: &str,
    notes: Option<&str>,
) {
    let mut cmd = dmg();
    cmd.args([
        "--data", store_path, "submit", "--date", date, "--sku", sku, "--product", product,
        "--qty", qty, "--damage", damage, "--zone", zone, "--team", team,
    ]);
    if let Some(n) = notes {
        cmd.args(["--notes", n]);
    }
    cmd.assert().success();
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    // init store (creates the header-only file, skips the config file)
    dmg()
        .args(["--data", store_path, "--test", "init"])
        .assert()
        .success();

    submit(
        store_path, "2024-01-15", "ABC123", "Milk", "2", "leaking", "cooler", "receiving", None,
    );
    submit(
        store_path,
        "2024-01-16",
        "XYZ777",
        "Eggs",
        "6",
        "crushed",
        "dry",
        "stocking",
        Some("dropped pallet"),
    );
    submit(
        store_path, "2024-01-17", "ABC123", "Milk", "1", "leaking", "cooler", "shipping", None,
    );
}
