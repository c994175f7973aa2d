// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so countdowns can be driven by a fake in tests.

use crate::instant::Instant;
use chrono::Local;
#[cfg(any(test, feature = "test-support"))]
use parking_lot::Mutex;
#[cfg(any(test, feature = "test-support"))]
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    fn epoch_ms(&self) -> i64 {
        self.now().epoch_ms
    }
}

/// Host wall clock, resolved in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_datetime(&Local::now())
    }
}

/// Manually driven clock resolved in UTC. Clones share the same time.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone)]
pub struct FakeClock {
    epoch_ms: Arc<Mutex<i64>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    /// Starts at 2023-03-14 00:00:00 UTC.
    pub fn new() -> Self {
        Self::at(1_678_752_000_000)
    }

    pub fn at(epoch_ms: i64) -> Self {
        Self {
            epoch_ms: Arc::new(Mutex::new(epoch_ms)),
        }
    }

    pub fn set_epoch_ms(&self, epoch_ms: i64) {
        *self.epoch_ms.lock() = epoch_ms;
    }

    pub fn advance_ms(&self, ms: i64) {
        *self.epoch_ms.lock() += ms;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn now(&self) -> Instant {
        let ms = *self.epoch_ms.lock();
        // Out-of-range fake times fall back to field-less instants.
        Instant::from_epoch_ms_utc(ms).unwrap_or(Instant {
            epoch_ms: ms,
            year: 1970,
            month: 0,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: 4,
        })
    }

    fn epoch_ms(&self) -> i64 {
        *self.epoch_ms.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
