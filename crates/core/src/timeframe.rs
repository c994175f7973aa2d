// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time frames bounded by two instants, and their position in a schedule.
//!
//! Prediction windows are modelled as an ordered list of [`TimeFrame`]s.
//! [`SequencedTimeFrame`] locates the window in effect at a given moment and
//! [`WindowSummary`] renders it for notifications.

use crate::instant::Instant;
use crate::time_fmt::{format_clock_time, format_short_date, format_verbose_duration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFrameError {
    #[error("current time frame is missing")]
    MissingCurrent,
    #[error("time frame {index} must end after it begins")]
    Invalid { index: usize },
    #[error("time frames {first} and {second} overlap")]
    Overlapping { first: usize, second: usize },
}

/// A span between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub from: Instant,
    pub until: Instant,
}

impl TimeFrame {
    pub fn new(from: Instant, until: Instant) -> Self {
        Self { from, until }
    }

    /// `until` must be strictly after `from`.
    pub fn is_valid(&self) -> bool {
        self.until.epoch_ms > self.from.epoch_ms
    }

    /// True once `ts` is at or after the start.
    pub fn has_begun_by(&self, ts: &Instant) -> bool {
        self.from.epoch_ms <= ts.epoch_ms
    }

    /// True once `ts` is at or after the end.
    pub fn has_elapsed_by(&self, ts: &Instant) -> bool {
        self.until.epoch_ms <= ts.epoch_ms
    }

    /// True while `ts` falls inside `[from, until)`.
    pub fn is_active_at(&self, ts: &Instant) -> bool {
        self.has_begun_by(ts) && !self.has_elapsed_by(ts)
    }

    /// Consecutive frames sharing only a boundary do not overlap.
    pub fn overlaps_with(&self, other: &TimeFrame) -> bool {
        if other.from.epoch_ms == self.until.epoch_ms || other.until.epoch_ms == self.from.epoch_ms
        {
            return false;
        }

        other.is_active_at(&self.from)
            || other.is_active_at(&self.until)
            || self.is_active_at(&other.from)
            || self.is_active_at(&other.until)
    }

    pub fn begins_within(&self, other: &TimeFrame) -> bool {
        self.from.epoch_ms >= other.from.epoch_ms && self.has_begun_by(&other.until)
    }

    pub fn ends_within(&self, other: &TimeFrame) -> bool {
        self.until.epoch_ms >= other.from.epoch_ms && self.has_elapsed_by(&other.until)
    }

    /// Length of the frame, e.g. `"2 days 0 hours 0 minutes 0 seconds"`.
    pub fn duration_text(&self) -> String {
        format_verbose_duration(&self.from, &self.until)
    }
}

/// Check that frames are individually valid and pairwise disjoint.
pub fn validate_schedule(frames: &[TimeFrame]) -> Result<(), TimeFrameError> {
    for (index, frame) in frames.iter().enumerate() {
        if !frame.is_valid() {
            return Err(TimeFrameError::Invalid { index });
        }
    }
    for (first, a) in frames.iter().enumerate() {
        for (offset, b) in frames[first + 1..].iter().enumerate() {
            if a.overlaps_with(b) {
                return Err(TimeFrameError::Overlapping {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    Ok(())
}

/// A frame in the context of the wider schedule it belongs to.
///
/// `count` is 1-based; zero means no frame has begun yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencedTimeFrame {
    pub count: usize,
    pub total: usize,
    pub current: Option<TimeFrame>,
    pub next: Option<TimeFrame>,
}

impl SequencedTimeFrame {
    /// Locate `ts` within `frames`, numbering them by start time.
    ///
    /// The current frame is the last one that has begun by `ts` (it may
    /// already have elapsed, between windows). The next frame is the first
    /// one that has not begun yet.
    pub fn locate(frames: &[TimeFrame], ts: &Instant) -> Self {
        let mut ordered = frames.to_vec();
        ordered.sort_by_key(|f| f.from.epoch_ms);
        let begun = ordered.iter().take_while(|f| f.has_begun_by(ts)).count();
        Self {
            count: begun,
            total: ordered.len(),
            current: begun.checked_sub(1).and_then(|i| ordered.get(i)).copied(),
            next: ordered.get(begun).copied(),
        }
    }

    pub fn is_last(&self) -> bool {
        self.count == self.total
    }

    pub fn summary(&self) -> Result<WindowSummary, TimeFrameError> {
        let current = self.current.ok_or(TimeFrameError::MissingCurrent)?;
        Ok(WindowSummary {
            current: self.count,
            total: self.total,
            closing_date: format_short_date(&current.until),
            closing_time: format_clock_time(&current.until),
            next_opening_date: self
                .next
                .map(|n| format_short_date(&n.from))
                .unwrap_or_default(),
            next_opening_time: self
                .next
                .map(|n| format_clock_time(&n.from))
                .unwrap_or_default(),
            is_last: self.is_last(),
        })
    }
}

/// Display strings for a prediction window notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub current: usize,
    pub total: usize,
    pub closing_date: String,
    pub closing_time: String,
    pub next_opening_date: String,
    pub next_opening_time: String,
    pub is_last: bool,
}

#[cfg(test)]
#[path = "timeframe_tests.rs"]
mod tests;
