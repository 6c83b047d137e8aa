// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use log::LevelFilter;
use std::time::Duration;

use crate::config::{ScanConfig, DEFAULT_METHOD, DEFAULT_TIMEOUT_SECS};
use crate::logging::parse_level;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Detects HTTP Request Smuggling vulnerabilities."
)]
pub struct Cli {
    #[arg(
        help = "The URL to scan.",
        required_unless_present = "list_probes"
    )]
    pub url: Option<String>,

    #[arg(
        long = "method",
        default_value = DEFAULT_METHOD,
        help = "The HTTP method to use"
    )]
    pub method: String,

    #[arg(
        long = "data",
        help = "Data to send with the request (e.g., POST data)"
    )]
    pub data: Option<String>,

    #[arg(long = "headers", help = "Custom headers to include (JSON format)")]
    pub headers: Option<String>,

    #[arg(
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long = "log-level",
        default_value = "info",
        value_parser = log_level_arg
    )]
    pub log_level: LevelFilter,

    #[arg(long = "json", help = "Print the scan report as JSON on stdout")]
    pub json: bool,

    #[arg(long = "list-probes", help = "List the built-in probes and exit")]
    pub list_probes: bool,
}

fn log_level_arg(raw: &str) -> Result<LevelFilter, String> {
    parse_level(raw).ok_or_else(|| {
        format!(
            "invalid log level '{}' (expected off, error, warn, info, debug or trace)",
            raw
        )
    })
}

impl Cli {
    pub fn to_config(&self) -> Option<ScanConfig> {
        let url = self.url.as_ref()?;
        Some(
            ScanConfig::new(url.clone())
                .with_method(self.method.clone())
                .with_body(self.data.clone())
                .with_headers(self.headers.clone())
                .with_timeout(Duration::from_secs(self.timeout))
                .with_verbose(self.verbose)
                .with_log_level(self.log_level)
                .with_json_report(self.json),
        )
    }
}
