// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pl duration` - render the span between two timestamps

use anyhow::Result;
use clap::Args;
use pl_core::{format_verbose_duration, DurationParts};
use serde::Serialize;

use super::resolve_instant;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct DurationArgs {
    /// Start, in epoch milliseconds
    #[arg(value_name = "FROM_MS", allow_negative_numbers = true)]
    pub from_ms: i64,

    /// Target, in epoch milliseconds
    #[arg(value_name = "TO_MS", allow_negative_numbers = true)]
    pub to_ms: i64,
}

#[derive(Debug, Serialize)]
struct DurationOutput {
    diff_ms: i64,
    parts: DurationParts,
    text: String,
}

pub fn handle(args: DurationArgs, format: OutputFormat) -> Result<()> {
    // Fields don't matter for a span, so skip the local zone lookup.
    let start = resolve_instant(args.from_ms, true)?;
    let target = resolve_instant(args.to_ms, true)?;
    let diff_ms = start.millis_until(&target);

    let out = DurationOutput {
        diff_ms,
        parts: DurationParts::from_millis(diff_ms),
        text: format_verbose_duration(&start, &target),
    };
    output::print(format, &out.text, &out)
}
