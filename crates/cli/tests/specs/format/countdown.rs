//! `pl countdown` specs

use crate::prelude::*;

#[test]
fn past_target_reads_zero_seconds() {
    cli()
        .args(&["countdown", &PI_DAY_MS.to_string()])
        .passes()
        .stdout_eq("0 seconds\n");
}

#[test]
fn missing_target_prints_empty_line() {
    cli().args(&["countdown"]).passes().stdout_eq("\n");
}

#[test]
fn future_target_counts_days() {
    // Year 2200 is comfortably in the future
    let run = cli()
        .args(&["-o", "json", "countdown", "7258118400000"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["passed"], false);
    let text = json["text"].as_str().unwrap();
    assert!(text.contains(" days "), "unexpected countdown: {}", text);
    assert!(text.ends_with("seconds") || text.ends_with("second"));
}
