// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remaining-time text for countdown displays.

use crate::clock::Clock;
use crate::instant::Instant;
use crate::time_fmt::format_verbose_duration;

/// Time left until `target`, or `""` while the target is still unknown.
///
/// Targets in the past read `"0 seconds"`.
pub fn countdown(clock: &impl Clock, target: Option<&Instant>) -> String {
    let Some(target) = target else {
        tracing::debug!("countdown target not loaded yet");
        return String::new();
    };
    let now = clock.now();
    let remaining_ms = now.millis_until(target);
    tracing::debug!(remaining_ms, "countdown");
    format_verbose_duration(&now, target)
}

/// True once `target` has been reached.
pub fn has_passed(clock: &impl Clock, target: &Instant) -> bool {
    clock.epoch_ms() >= target.epoch_ms
}

#[cfg(test)]
#[path = "countdown_tests.rs"]
mod tests;
