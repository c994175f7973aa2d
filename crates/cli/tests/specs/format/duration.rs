//! `pl duration` specs

use crate::prelude::*;

fn duration_from_pi_day(ms: i64) -> RunAssert {
    cli()
        .args(&[
            "duration",
            &PI_DAY_MS.to_string(),
            &(PI_DAY_MS + ms).to_string(),
        ])
        .passes()
}

#[test]
fn seconds_only() {
    duration_from_pi_day(9_000).stdout_eq("9 seconds\n");
}

#[test]
fn minutes_and_seconds() {
    duration_from_pi_day(65_000).stdout_eq("1 minute 5 seconds\n");
}

#[test]
fn singular_units() {
    duration_from_pi_day(3_661_000).stdout_eq("1 hour 1 minute 1 second\n");
}

#[test]
fn cascading_zero_fill() {
    duration_from_pi_day(90_000_000).stdout_eq("1 day 1 hour 0 minutes 0 seconds\n");
}

#[test]
fn zero_and_negative_spans() {
    duration_from_pi_day(0).stdout_eq("0 seconds\n");
    duration_from_pi_day(-5_000).stdout_eq("0 seconds\n");
}

#[test]
fn json_output_carries_parts() {
    let run = cli()
        .args(&["duration", "0", "90061000", "--output", "json"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["diff_ms"], 90_061_000);
    assert_eq!(json["parts"]["days"], 1);
    assert_eq!(json["parts"]["hours"], 1);
    assert_eq!(json["parts"]["minutes"], 1);
    assert_eq!(json["parts"]["seconds"], 1);
    assert_eq!(json["text"], "1 day 1 hour 1 minute 1 second");
}
