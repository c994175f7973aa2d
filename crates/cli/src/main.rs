// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pl - prediction league time formatting CLI

mod commands;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{countdown, date, duration, window};
use pl_core::{FormatConfig, SystemClock};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser)]
#[command(
    name = "pl",
    version,
    about = "Prediction league - verbose dates, durations and countdowns"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (defaults to $PL_CONFIG, then ~/.config/pl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a timestamp as a verbose date
    Date(date::DateArgs),
    /// Render the span between two timestamps
    Duration(duration::DurationArgs),
    /// Show the time left until a timestamp
    Countdown(countdown::CountdownArgs),
    /// Summarize the prediction window in effect at a moment
    Window(window::WindowArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only ever carries formatted output.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants interpolate their source).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Explicit path (flag or `PL_CONFIG`) must exist; the default path may not.
fn load_config(explicit: Option<&Path>) -> Result<FormatConfig> {
    if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_override) {
        return Ok(FormatConfig::load(&path)?);
    }
    match env::default_config_path() {
        Some(path) => Ok(FormatConfig::load_or_default(&path)?),
        None => Ok(FormatConfig::default()),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided, print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let clock = SystemClock;

    match command {
        Commands::Date(args) => date::handle(args, &config, format)?,
        Commands::Duration(args) => duration::handle(args, format)?,
        Commands::Countdown(args) => countdown::handle(args, &clock, &config, format)?,
        Commands::Window(args) => window::handle(args, &clock, &config, format)?,
    }

    Ok(())
}
