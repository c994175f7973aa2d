// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pl date` - render a timestamp as a verbose date

use anyhow::Result;
use clap::Args;
use pl_core::{format_verbose_date, DateStyle, FormatConfig, Instant};
use serde::Serialize;

use super::resolve_instant;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct DateArgs {
    /// Epoch milliseconds; when omitted an empty line is printed
    #[arg(value_name = "EPOCH_MS", allow_negative_numbers = true)]
    pub epoch_ms: Option<i64>,

    /// Date convention: "weekday" or "numeric" (overrides config)
    #[arg(long)]
    pub style: Option<DateStyle>,

    /// Resolve the timestamp in UTC instead of the local timezone
    #[arg(long)]
    pub utc: bool,
}

#[derive(Debug, Serialize)]
struct DateOutput {
    epoch_ms: Option<i64>,
    style: DateStyle,
    instant: Option<Instant>,
    text: String,
}

pub fn handle(args: DateArgs, config: &FormatConfig, format: OutputFormat) -> Result<()> {
    let style = args.style.unwrap_or(config.date_style);
    let instant = args
        .epoch_ms
        .map(|ms| resolve_instant(ms, args.utc || config.utc))
        .transpose()?;
    let text = format_verbose_date(instant.as_ref(), style);
    tracing::debug!(%style, epoch_ms = ?args.epoch_ms, "formatted date");

    let out = DateOutput {
        epoch_ms: args.epoch_ms,
        style,
        instant,
        text,
    };
    output::print(format, &out.text, &out)
}
