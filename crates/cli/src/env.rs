// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Explicit config file from `PL_CONFIG`.
pub fn config_override() -> Option<PathBuf> {
    std::env::var("PL_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Resolve default config file: XDG_CONFIG_HOME/pl > ~/.config/pl
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("pl/config.toml"));
        }
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/pl/config.toml"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
