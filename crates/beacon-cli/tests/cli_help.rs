use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("beacon")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_events_help_shows_links_flag() {
    cargo_bin_cmd!("beacon")
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--links"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("beacon")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("beacon")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}

#[test]
fn test_unknown_subcommand_fails() {
    cargo_bin_cmd!("beacon")
        .arg("frobnicate")
        .assert()
        .failure();
}
