// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared human-readable date and duration formatting.
//!
//! Both formatters are soft-fail: an absent date renders as `""` and a
//! non-positive span renders as `"0 seconds"`.

use crate::instant::Instant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Which convention [`format_verbose_date`] renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `"Tue 14 March 2023 at 3:05pm"`
    #[default]
    Weekday,
    /// `"14/03/2023 15:05:09"`
    Numeric,
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateStyle::Weekday => write!(f, "weekday"),
            DateStyle::Numeric => write!(f, "numeric"),
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekday" => Ok(DateStyle::Weekday),
            "numeric" => Ok(DateStyle::Numeric),
            other => Err(format!(
                "unknown date style '{}' (expected 'weekday' or 'numeric')",
                other
            )),
        }
    }
}

/// Format an instant in the given style, or `""` when there is no instant yet.
pub fn format_verbose_date(instant: Option<&Instant>, style: DateStyle) -> String {
    let Some(instant) = instant else {
        return String::new();
    };
    match style {
        DateStyle::Weekday => format_weekday_date(instant),
        DateStyle::Numeric => format_numeric_date(instant),
    }
}

/// `"Tue 14 March 2023 at 3:05pm"`: 12-hour clock, unpadded hour.
pub fn format_weekday_date(instant: &Instant) -> String {
    format!(
        "{} {} {} {} at {}",
        weekday_name(instant.weekday),
        instant.day,
        month_name(instant.month),
        instant.year,
        format_clock_time(instant)
    )
}

/// `"14/03/2023 15:05:09"`: 24-hour clock, everything but the year padded.
pub fn format_numeric_date(instant: &Instant) -> String {
    format!(
        "{:02}/{:02}/{} {:02}:{:02}:{:02}",
        instant.day,
        u32::from(instant.month) + 1,
        instant.year,
        instant.hour,
        instant.minute,
        instant.second
    )
}

/// `"Tue 14 March"`
pub fn format_short_date(instant: &Instant) -> String {
    format!(
        "{} {} {}",
        weekday_name(instant.weekday),
        instant.day,
        month_name(instant.month)
    )
}

/// `"3:05pm"`. Midnight and noon both render as 12.
pub fn format_clock_time(instant: &Instant) -> String {
    let (mut hour, meridiem) = if instant.hour >= 12 {
        (instant.hour - 12, "pm")
    } else {
        (instant.hour, "am")
    };
    if hour == 0 {
        hour = 12;
    }
    format!("{}:{:02}{}", hour, instant.minute, meridiem)
}

// Out-of-range indices come from hand-built instants; render them verbatim
// rather than failing.
fn weekday_name(weekday: u8) -> String {
    WEEKDAYS
        .get(usize::from(weekday))
        .map_or_else(|| weekday.to_string(), |s| (*s).to_string())
}

fn month_name(month: u8) -> String {
    MONTHS
        .get(usize::from(month))
        .map_or_else(|| (u32::from(month) + 1).to_string(), |s| (*s).to_string())
}

/// A positive span split into whole units, largest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose a millisecond span. Non-positive spans are all zeros.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::default();
        }
        let total_days = diff_ms / MS_PER_DAY;
        let total_hours = diff_ms / MS_PER_HOUR;
        let total_minutes = diff_ms / MS_PER_MINUTE;
        let total_seconds = diff_ms / MS_PER_SECOND;
        Self {
            days: total_days as u64,
            hours: (total_hours - total_days * 24) as u64,
            minutes: (total_minutes - total_hours * 60) as u64,
            seconds: (total_seconds - total_minutes * 60) as u64,
        }
    }
}

impl fmt::Display for DurationParts {
    /// Once a coarser unit is shown, every finer unit down to seconds is
    /// shown too, even at zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_days = self.days > 0;
        let show_hours = show_days || self.hours > 0;
        let show_minutes = show_hours || self.minutes > 0;

        let mut segments = Vec::with_capacity(4);
        if show_days {
            segments.push(plural(self.days, "day"));
        }
        if show_hours {
            segments.push(plural(self.hours, "hour"));
        }
        if show_minutes {
            segments.push(plural(self.minutes, "minute"));
        }
        segments.push(plural(self.seconds, "second"));

        write!(f, "{}", segments.join(" ").trim())
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Format the span from `start` to `target`, e.g. `"1 hour 1 minute 1 second"`.
pub fn format_verbose_duration(start: &Instant, target: &Instant) -> String {
    format_verbose_duration_ms(start.millis_until(target))
}

/// Format a millisecond span. Zero and negative spans are `"0 seconds"`.
pub fn format_verbose_duration_ms(diff_ms: i64) -> String {
    if diff_ms <= 0 {
        return "0 seconds".to_string();
    }
    DurationParts::from_millis(diff_ms).to_string()
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
