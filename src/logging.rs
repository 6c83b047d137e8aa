// File: logging.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::str::FromStr;

/// Installs the process-wide logger. Call once, before anything logs.
pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("hyper_util", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .with_utc_timestamps()
        .init()
        .context("Failed to initialize logger")
}

pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(raw.trim()).ok()
}

/// Verbose output is logged at info, so `--verbose` never runs quieter than that.
pub fn effective_level(requested: LevelFilter, verbose: bool) -> LevelFilter {
    if verbose {
        requested.max(LevelFilter::Info)
    } else {
        requested
    }
}
