//! `pl window` specs

use crate::prelude::*;

const HOUR_MS: i64 = 3_600_000;

/// Tue 14 March 2023, 00:00 UTC
const BASE_MS: i64 = 1_678_752_000_000;

fn frame(from_hour: i64, until_hour: i64) -> String {
    format!(
        "{}..{}",
        BASE_MS + from_hour * HOUR_MS,
        BASE_MS + until_hour * HOUR_MS
    )
}

fn at(hour: i64) -> String {
    (BASE_MS + hour * HOUR_MS).to_string()
}

#[test]
fn first_window_shows_next_opening() {
    cli()
        .args(&[
            "window",
            "--frame",
            &frame(0, 10),
            "--frame",
            &frame(24, 34),
            "--at",
            &at(1),
        ])
        .passes()
        .stdout_eq(
            "Window 1 of 2\nCloses: Tue 14 March at 10:00am\nNext opens: Wed 15 March at 12:00am\n",
        );
}

#[test]
fn last_window_is_flagged() {
    cli()
        .args(&[
            "window",
            "--frame",
            &frame(0, 10),
            "--frame",
            &frame(24, 38),
            "--at",
            &at(30),
        ])
        .passes()
        .stdout_eq("Window 2 of 2\nCloses: Wed 15 March at 2:00pm\nThis is the last window\n");
}

#[test]
fn json_summary() {
    let run = cli()
        .args(&[
            "window",
            "-o",
            "json",
            "--frame",
            &frame(0, 10),
            "--at",
            &at(2),
        ])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["current"], 1);
    assert_eq!(json["total"], 1);
    assert_eq!(json["closing_time"], "10:00am");
    assert_eq!(json["next_opening_date"], "");
    assert_eq!(json["is_last"], true);
}

#[test]
fn frames_given_out_of_order() {
    cli()
        .args(&[
            "window",
            "--frame",
            &frame(24, 34),
            "--frame",
            &frame(0, 10),
            "--at",
            &at(5),
        ])
        .passes()
        .stdout_eq(
            "Window 1 of 2\nCloses: Tue 14 March at 10:00am\nNext opens: Wed 15 March at 12:00am\n",
        );
}
