// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pl window` - summarize the prediction window in effect at a moment

use anyhow::Result;
use clap::Args;
use pl_core::{
    validate_schedule, Clock, FormatConfig, SequencedTimeFrame, TimeFrame, WindowSummary,
};

use super::resolve_instant;
use crate::output::{self, OutputFormat};

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;

#[derive(Args)]
pub struct WindowArgs {
    /// Window bounds as FROM_MS..UNTIL_MS, in chronological order (repeatable)
    #[arg(
        long = "frame",
        value_name = "FROM_MS..UNTIL_MS",
        value_parser = parse_frame,
        allow_hyphen_values = true,
        required = true
    )]
    pub frames: Vec<(i64, i64)>,

    /// Moment to evaluate, in epoch milliseconds (defaults to now)
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<i64>,
}

/// Parse `"<from>..<until>"` epoch milliseconds.
pub fn parse_frame(s: &str) -> Result<(i64, i64), String> {
    let (from, until) = s
        .split_once("..")
        .ok_or_else(|| format!("expected FROM_MS..UNTIL_MS, got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid timestamp '{}': {}", part.trim(), e))
    };
    Ok((parse(from)?, parse(until)?))
}

/// Human-readable summary, one fact per line.
pub fn summary_text(summary: &WindowSummary) -> String {
    let mut lines = vec![
        format!("Window {} of {}", summary.current, summary.total),
        format!(
            "Closes: {} at {}",
            summary.closing_date, summary.closing_time
        ),
    ];
    if summary.is_last {
        lines.push("This is the last window".to_string());
    } else if !summary.next_opening_date.is_empty() {
        lines.push(format!(
            "Next opens: {} at {}",
            summary.next_opening_date, summary.next_opening_time
        ));
    }
    lines.join("\n")
}

pub fn handle(
    args: WindowArgs,
    clock: &impl Clock,
    config: &FormatConfig,
    format: OutputFormat,
) -> Result<()> {
    let frames = args
        .frames
        .iter()
        .map(|&(from, until)| -> Result<TimeFrame> {
            Ok(TimeFrame::new(
                resolve_instant(from, config.utc)?,
                resolve_instant(until, config.utc)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    validate_schedule(&frames)?;

    let at = match args.at {
        Some(ms) => resolve_instant(ms, config.utc)?,
        None => clock.now(),
    };
    let sequenced = SequencedTimeFrame::locate(&frames, &at);
    tracing::debug!(count = sequenced.count, total = sequenced.total, "located window");

    let summary = sequenced.summary()?;
    output::print(format, &summary_text(&summary), &summary)
}
