// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod countdown;
pub mod date;
pub mod duration;
pub mod window;

use anyhow::Result;
use pl_core::Instant;

/// Resolve an epoch timestamp into wall-clock fields.
pub fn resolve_instant(epoch_ms: i64, utc: bool) -> Result<Instant> {
    let instant = if utc {
        Instant::from_epoch_ms_utc(epoch_ms)?
    } else {
        Instant::from_epoch_ms_local(epoch_ms)?
    };
    Ok(instant)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
