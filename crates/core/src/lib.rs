// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pl-core: date, duration and time-frame formatting for the prediction league

pub mod clock;
pub mod config;
pub mod countdown;
pub mod instant;
pub mod time_fmt;
pub mod timeframe;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, FormatConfig};
pub use countdown::{countdown, has_passed};
pub use instant::{Instant, InstantBuilder, InstantError};
pub use time_fmt::{
    format_clock_time, format_numeric_date, format_short_date, format_verbose_date,
    format_verbose_duration, format_verbose_duration_ms, format_weekday_date, DateStyle,
    DurationParts,
};
pub use timeframe::{
    validate_schedule, SequencedTimeFrame, TimeFrame, TimeFrameError, WindowSummary,
};
