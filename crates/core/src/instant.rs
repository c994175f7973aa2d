// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved points in time.
//!
//! An [`Instant`] carries wall-clock fields that were already resolved in
//! some timezone by whoever produced it, plus the epoch milliseconds used
//! for ordering and duration arithmetic. The formatters only read fields;
//! they never convert between zones.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised when building an [`Instant`] from loose fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantError {
    #[error("month index {0} out of range (expected 0-11)")]
    MonthOutOfRange(u8),
    #[error("day {day} out of range for {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u8, day: u8 },
    #[error("hour {0} out of range (expected 0-23)")]
    HourOutOfRange(u8),
    #[error("minute {0} out of range (expected 0-59)")]
    MinuteOutOfRange(u8),
    #[error("second {0} out of range (expected 0-59)")]
    SecondOutOfRange(u8),
    #[error("weekday {0} out of range (expected 0-6, Sunday first)")]
    WeekdayOutOfRange(u8),
    #[error("timestamp {0}ms cannot be represented")]
    TimestampOutOfRange(i64),
}

/// A point in time with readable calendar and clock fields.
///
/// `month` is zero-based (0 = January) and `weekday` counts from Sunday
/// (0 = Sunday). Fields are public so callers that already hold resolved
/// values can construct one directly; out-of-range values are rendered
/// as-is by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instant {
    pub epoch_ms: i64,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: u8,
}

impl Instant {
    /// Read the wall-clock fields of an already-zoned datetime.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            epoch_ms: dt.timestamp_millis(),
            year: dt.year(),
            month: dt.month0() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            weekday: dt.weekday().num_days_from_sunday() as u8,
        }
    }

    /// Resolve epoch milliseconds in UTC.
    pub fn from_epoch_ms_utc(epoch_ms: i64) -> Result<Self, InstantError> {
        DateTime::<Utc>::from_timestamp_millis(epoch_ms)
            .map(|dt| Self::from_datetime(&dt))
            .ok_or(InstantError::TimestampOutOfRange(epoch_ms))
    }

    /// Resolve epoch milliseconds in the host's local timezone.
    pub fn from_epoch_ms_local(epoch_ms: i64) -> Result<Self, InstantError> {
        Local
            .timestamp_millis_opt(epoch_ms)
            .single()
            .map(|dt| Self::from_datetime(&dt))
            .ok_or(InstantError::TimestampOutOfRange(epoch_ms))
    }

    /// Start building an instant field by field.
    pub fn builder() -> InstantBuilder {
        InstantBuilder::default()
    }

    /// Signed milliseconds from `self` to `target`.
    pub fn millis_until(&self, target: &Instant) -> i64 {
        target.epoch_ms.saturating_sub(self.epoch_ms)
    }

    /// Shift by a signed number of milliseconds, re-resolving fields in UTC.
    pub fn plus_millis_utc(&self, ms: i64) -> Result<Self, InstantError> {
        let shifted = self
            .epoch_ms
            .checked_add(ms)
            .ok_or(InstantError::TimestampOutOfRange(self.epoch_ms))?;
        Self::from_epoch_ms_utc(shifted)
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_ms
            .cmp(&other.epoch_ms)
            .then_with(|| {
                (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
            })
            .then_with(|| {
                (self.hour, self.minute, self.second, self.weekday).cmp(&(
                    other.hour,
                    other.minute,
                    other.second,
                    other.weekday,
                ))
            })
    }
}

/// Field-wise constructor for [`Instant`] with range validation.
///
/// When no epoch is supplied the fields are interpreted as UTC wall-clock
/// time, and the weekday is derived from the date unless set explicitly.
#[derive(Debug, Clone)]
pub struct InstantBuilder {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    weekday: Option<u8>,
    epoch_ms: Option<i64>,
}

impl Default for InstantBuilder {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 0,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: None,
            epoch_ms: None,
        }
    }
}

impl InstantBuilder {
    /// Set the date; `month` is zero-based.
    pub fn date(mut self, year: i32, month: u8, day: u8) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }
    pub fn time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }
    pub fn weekday(mut self, v: u8) -> Self {
        self.weekday = Some(v);
        self
    }
    pub fn epoch_ms(mut self, v: i64) -> Self {
        self.epoch_ms = Some(v);
        self
    }

    pub fn build(self) -> Result<Instant, InstantError> {
        if self.month > 11 {
            return Err(InstantError::MonthOutOfRange(self.month));
        }
        if self.hour > 23 {
            return Err(InstantError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(InstantError::MinuteOutOfRange(self.minute));
        }
        if self.second > 59 {
            return Err(InstantError::SecondOutOfRange(self.second));
        }
        if let Some(weekday) = self.weekday.filter(|w| *w > 6) {
            return Err(InstantError::WeekdayOutOfRange(weekday));
        }

        let date = NaiveDate::from_ymd_opt(self.year, u32::from(self.month) + 1, self.day.into())
            .ok_or(InstantError::DayOutOfRange {
                year: self.year,
                month: self.month + 1,
                day: self.day,
            })?;
        let naive = date
            .and_hms_opt(self.hour.into(), self.minute.into(), self.second.into())
            .ok_or(InstantError::HourOutOfRange(self.hour))?;

        Ok(Instant {
            epoch_ms: self
                .epoch_ms
                .unwrap_or_else(|| naive.and_utc().timestamp_millis()),
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            weekday: self
                .weekday
                .unwrap_or(date.weekday().num_days_from_sunday() as u8),
        })
    }
}

#[cfg(test)]
#[path = "instant_tests.rs"]
mod tests;
