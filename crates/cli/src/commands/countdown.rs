// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pl countdown` - time left until a timestamp

use anyhow::Result;
use clap::Args;
use pl_core::{format_verbose_duration, Clock, FormatConfig};
use serde::Serialize;

use super::resolve_instant;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CountdownArgs {
    /// Target, in epoch milliseconds; when omitted an empty line is printed
    #[arg(value_name = "TARGET_MS", allow_negative_numbers = true)]
    pub target_ms: Option<i64>,
}

#[derive(Debug, PartialEq, Serialize)]
struct CountdownOutput {
    target_ms: Option<i64>,
    passed: bool,
    text: String,
}

/// Read the clock once so `passed` and `text` agree at the boundary.
fn evaluate(target_ms: Option<i64>, clock: &impl Clock, utc: bool) -> Result<CountdownOutput> {
    let target = target_ms.map(|ms| resolve_instant(ms, utc)).transpose()?;
    let now = clock.now();
    tracing::debug!(now_ms = now.epoch_ms, ?target_ms, "countdown");

    Ok(CountdownOutput {
        target_ms,
        passed: target.is_some_and(|t| now.epoch_ms >= t.epoch_ms),
        text: target
            .map(|t| format_verbose_duration(&now, &t))
            .unwrap_or_default(),
    })
}

pub fn handle(
    args: CountdownArgs,
    clock: &impl Clock,
    config: &FormatConfig,
    format: OutputFormat,
) -> Result<()> {
    let out = evaluate(args.target_ms, clock, config.utc)?;
    output::print(format, &out.text, &out)
}

#[cfg(test)]
#[path = "countdown_tests.rs"]
mod tests;
