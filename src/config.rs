// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::LevelFilter;
use std::time::Duration;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a single smuggling scan. Built once from the command line
/// and only read afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    target: String,
    method: String,
    body: Option<String>,
    headers: Option<String>,
    timeout: Duration,
    verbose: bool,
    log_level: LevelFilter,
    json_report: bool,
}

impl ScanConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: DEFAULT_METHOD.to_string(),
            body: None,
            headers: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
            log_level: LevelFilter::Info,
            json_report: false,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    pub fn with_headers(mut self, headers: Option<String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_json_report(mut self, json_report: bool) -> Self {
        self.json_report = json_report;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Raw JSON text of the caller's extra headers, parsed per probe.
    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn json_report(&self) -> bool {
        self.json_report
    }
}
