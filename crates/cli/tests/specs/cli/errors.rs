//! CLI error specs
//!
//! Failures print `Error: ...` to stderr and exit 1; usage errors come from clap.

use crate::prelude::*;

#[test]
fn unknown_style_is_usage_error() {
    cli()
        .args(&["date", "0", "--style", "iso"])
        .fails()
        .code(2)
        .stderr_has("unknown date style 'iso'");
}

#[test]
fn unrepresentable_timestamp_fails() {
    cli()
        .args(&["date", "9223372036854775807"])
        .fails()
        .code(1)
        .stderr_has("Error: timestamp 9223372036854775807ms cannot be represented");
}

#[test]
fn missing_explicit_config_fails() {
    cli()
        .args(&["--config", "/nonexistent/pl.toml", "date", "0"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read config /nonexistent/pl.toml");
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "date_style = \"iso\"\n").unwrap();

    cli()
        .env("PL_CONFIG", &path)
        .args(&["date", "0"])
        .fails()
        .code(1)
        .stderr_has("invalid config");
}

#[test]
fn overlapping_windows_fail() {
    cli()
        .args(&["window", "--frame", "0..100", "--frame", "50..150", "--at", "10"])
        .fails()
        .stderr_has("Error: time frames 0 and 1 overlap");
}

#[test]
fn window_before_first_frame_fails() {
    cli()
        .args(&["window", "--frame", "1000..2000", "--at", "0"])
        .fails()
        .stderr_has("Error: current time frame is missing");
}
