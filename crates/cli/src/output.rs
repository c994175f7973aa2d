// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render either the text form or the JSON form of a result.
pub fn render<T: Serialize>(format: OutputFormat, text: &str, value: &T) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Print a result in the requested format.
///
/// Text output is printed as-is, so an empty result prints an empty line.
pub fn print<T: Serialize>(format: OutputFormat, text: &str, value: &T) -> anyhow::Result<()> {
    println!("{}", render(format, text, value)?);
    Ok(())
}
