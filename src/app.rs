// File: app.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::probes::default_probes;
use crate::report::{render_json, render_probe_catalogue, render_summary};
use crate::scanner::{ScanReport, SmugglingScanner};
use crate::validation::is_valid_url;
use anyhow::{Context, Result};
use log::{error, info};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub report: Option<ScanReport>,
}

impl RunOutcome {
    fn failed() -> Self {
        RunOutcome {
            exit_code: EXIT_FAILURE,
            report: None,
        }
    }
}

pub async fn run(cli: &Cli) -> i32 {
    if cli.list_probes {
        print!("{}", render_probe_catalogue(default_probes()));
        return EXIT_SUCCESS;
    }

    match cli.to_config() {
        Some(config) => run_scan(config).await.exit_code,
        None => {
            error!("No URL provided.");
            EXIT_FAILURE
        }
    }
}

/// Validates the target, fires the probes and logs the verdict. A finding
/// still exits with success; only a bad URL or a failed scan does not.
pub async fn run_scan(config: ScanConfig) -> RunOutcome {
    if !is_valid_url(config.target()) {
        error!("Invalid URL provided: {}", config.target());
        return RunOutcome::failed();
    }

    info!(
        "Starting HTTP Request Smuggling scan on: {}",
        config.target()
    );
    if let Some(data) = config.body() {
        info!("Request data recorded (probes send their own bodies): {:?}", data);
    }

    match execute(config).await {
        Ok(report) => RunOutcome {
            exit_code: EXIT_SUCCESS,
            report: Some(report),
        },
        Err(e) => {
            error!("An error occurred during the scan: {:#}", e);
            RunOutcome::failed()
        }
    }
}

async fn execute(config: ScanConfig) -> Result<ScanReport> {
    let json_report = config.json_report();
    let verbose = config.verbose();

    let scanner = SmugglingScanner::new(config).context("Failed to prepare scanner")?;
    let report = scanner.scan().await;

    if report.vulnerable {
        info!("HTTP Request Smuggling scan completed. Vulnerabilities found.");
    } else {
        info!("HTTP Request Smuggling scan completed. No immediate vulnerabilities found.");
    }

    if json_report {
        println!("{}", render_json(&report)?);
    } else if verbose {
        print!("{}", render_summary(&report));
    }

    Ok(report)
}
