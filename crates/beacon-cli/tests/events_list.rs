use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_events_lists_full_catalog_in_order() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("beacon")
        .env("BEACON_HOME", dir.path())
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Fest 2025"))
        .stdout(predicate::str::contains("Music Concert"))
        .stdout(predicate::str::contains("Main Auditorium"));
}

#[test]
fn test_events_hides_links_by_default() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("beacon")
        .env("BEACON_HOME", dir.path())
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("beacon.example.edu").not());
}

#[test]
fn test_events_shows_links_when_requested() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("beacon")
        .env("BEACON_HOME", dir.path())
        .args(["events", "--links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beacon.example.edu/events/tech-fest"));
}
