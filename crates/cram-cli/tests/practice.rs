//! End-to-end checks on the `practice` subcommand's failure ordering.
//!
//! The binary is run with `HOME` and `XDG_CONFIG_HOME` pointed at a temp
//! directory, so these tests never see (or touch) the developer's real
//! config.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_practice(home: &Path, deck: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cram"))
        .args(["practice", deck])
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .output()
        .unwrap()
}

#[test]
fn missing_config_is_reported_before_any_deck_error() {
    let home = tempdir().unwrap();
    // The deck path is also bad; the config complaint must win.
    let output = run_practice(home.path(), "no/such/deck.csv");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not configured"), "stderr: {stderr}");
    assert!(!stderr.contains("deck file not found"), "stderr: {stderr}");
}

#[test]
fn missing_deck_is_reported_once_configured() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("cram");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "provider = \"openai\"\napi_key = \"test-key\"\nmodel = \"gpt-4o-mini\"\n",
    )
    .unwrap();

    let output = run_practice(home.path(), "no/such/deck.csv");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("deck file not found"), "stderr: {stderr}");
}
