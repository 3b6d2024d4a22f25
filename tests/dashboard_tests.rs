mod common;
use common::{dmg, init_store_with_data, setup_test_store};

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_dashboard_empty_store() {
    let store_path = setup_test_store("dashboard_empty_store");

    dmg()
        .args(["--data", &store_path, "--test", "init"])
        .assert()
        .success();

    dmg()
        .args(["--data", &store_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("No reports yet"));
}

#[test]
fn test_dashboard_renders_all_sections() {
    let store_path = setup_test_store("dashboard_renders_all_sections");
    init_store_with_data(&store_path);

    dmg()
        .args(["--data", &store_path, "dashboard"])
        .assert()
        .success()
        .stdout(
            contains("Total reports logged")
                .and(contains("Damage by Type"))
                .and(contains("Damage by Storage Zone"))
                .and(contains("Damage by Team"))
                .and(contains("Most Damaged Products"))
                .and(contains("Full Damage Log"))
                .and(contains("Milk"))
                .and(contains("Eggs")),
        );
}

#[test]
fn test_dashboard_team_filter_narrows_log() {
    let store_path = setup_test_store("dashboard_team_filter_narrows_log");
    init_store_with_data(&store_path);

    dmg()
        .args(["--data", &store_path, "dashboard", "--team", "receiving"])
        .assert()
        .success()
        .stdout(
            contains("Filtered reports")
                .and(contains("Milk"))
                .and(contains("Eggs").not()),
        );
}

#[test]
fn test_dashboard_filters_are_anded() {
    let store_path = setup_test_store("dashboard_filters_are_anded");
    init_store_with_data(&store_path);

    // Milk rows are leaking+cooler; crossing them with team=stocking excludes everything.
    dmg()
        .args([
            "--data",
            &store_path,
            "dashboard",
            "--damage",
            "leaking",
            "--team",
            "stocking",
        ])
        .assert()
        .success()
        .stdout(contains("No reports match the selected filters"));
}

#[test]
fn test_dashboard_rejects_unknown_zone_filter() {
    let store_path = setup_test_store("dashboard_rejects_unknown_zone_filter");
    init_store_with_data(&store_path);

    dmg()
        .args(["--data", &store_path, "dashboard", "--zone", "attic"])
        .assert()
        .failure()
        .stderr(contains("Invalid storage zone"));
}

#[test]
fn test_dashboard_survives_unreadable_store() {
    let store_path = setup_test_store("dashboard_survives_unreadable_store");

    // A directory where the data file should be makes the store unreadable.
    fs::create_dir_all(&store_path).expect("create dir");

    dmg()
        .args(["--data", &store_path, "dashboard"])
        .assert()
        .success()
        .stderr(contains("Error loading data"));

    fs::remove_dir_all(&store_path).ok();
}
