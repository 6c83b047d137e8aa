// File: scanner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ScanConfig;
use crate::errors::Result;
use crate::headers::{header_map_to_pairs, merge_headers, parse_header_json};
use crate::http::{OutgoingRequest, RequestSender};
use crate::probes::{default_probes, ProbeDefinition, ProbeKind};
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ProbeOutcome {
    Detected,
    NotDetected,
    /// Never sent because the caller's header JSON was unusable.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub kind: ProbeKind,
    pub outcome: ProbeOutcome,
    pub status: Option<u16>,
    #[serde(serialize_with = "serialize_headers")]
    pub headers: Option<HeaderMap>,
    pub body: Option<String>,
    pub detected: bool,
    pub elapsed_ms: u64,
}

impl ProbeResult {
    fn skipped(kind: ProbeKind) -> Self {
        ProbeResult {
            kind,
            outcome: ProbeOutcome::Skipped,
            status: None,
            headers: None,
            body: None,
            detected: false,
            elapsed_ms: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn was_sent(&self) -> bool {
        self.outcome != ProbeOutcome::Skipped
    }
}

fn serialize_headers<S>(
    headers: &Option<HeaderMap>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    headers
        .as_ref()
        .map(header_map_to_pairs)
        .serialize(serializer)
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target: String,
    pub method: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<ProbeResult>,
    pub vulnerable: bool,
}

impl ScanReport {
    pub fn detections(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| r.detected)
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

pub struct SmugglingScanner {
    config: ScanConfig,
    sender: RequestSender,
    probes: Vec<ProbeDefinition>,
}

impl SmugglingScanner {
    pub fn new(config: ScanConfig) -> Result<Self> {
        let sender = RequestSender::new(config.timeout())?;
        Ok(Self {
            config,
            sender,
            probes: default_probes().to_vec(),
        })
    }

    pub fn with_probes(mut self, probes: Vec<ProbeDefinition>) -> Self {
        self.probes = probes;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn probes(&self) -> &[ProbeDefinition] {
        &self.probes
    }

    /// Runs the probes in order and stops after the first one whose response
    /// echoes the sentinel.
    pub async fn scan(&self) -> ScanReport {
        let started_at = Utc::now();
        let mut results = Vec::with_capacity(self.probes.len());

        for probe in &self.probes {
            let result = self.run_probe(probe).await;
            let detected = result.detected;
            results.push(result);
            if detected {
                debug!("Stopping after positive {} probe", probe.name());
                break;
            }
        }

        let vulnerable = results.iter().any(|r| r.detected);
        ScanReport {
            target: self.config.target().to_string(),
            method: self.config.method().to_string(),
            started_at,
            finished_at: Utc::now(),
            results,
            vulnerable,
        }
    }

    async fn run_probe(&self, probe: &ProbeDefinition) -> ProbeResult {
        let custom = match self.config.headers().map(parse_header_json).transpose() {
            Ok(custom) => custom,
            Err(e) => {
                error!("{}", e);
                return ProbeResult::skipped(probe.kind);
            }
        };

        let headers = match merge_headers(&probe.headers, custom.as_ref()) {
            Ok(headers) => headers,
            Err(e) => {
                error!("{}", e);
                return ProbeResult::skipped(probe.kind);
            }
        };

        let started = Instant::now();
        let response = self
            .sender
            .send(OutgoingRequest {
                url: self.config.target(),
                method: self.config.method(),
                body: Some(probe.body),
                headers: headers.into(),
                verbose: self.config.verbose(),
            })
            .await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let detected = response
            .as_ref()
            .is_some_and(|resp| probe.matches(resp.body()));

        if detected {
            warn!(
                "Potential {} HTTP Request Smuggling Vulnerability Detected!",
                probe.name()
            );
        } else {
            info!("{} Test: No immediate vulnerability detected.", probe.name());
        }

        let (status, headers, body) = match response {
            Some(resp) => {
                let (status, headers, body) = resp.into_parts();
                (Some(status), Some(headers), Some(body))
            }
            None => (None, None, None),
        };

        ProbeResult {
            kind: probe.kind,
            outcome: if detected {
                ProbeOutcome::Detected
            } else {
                ProbeOutcome::NotDetected
            },
            status,
            headers,
            body,
            detected,
            elapsed_ms,
        }
    }
}

/// Header pairs a probe would send, for display.
pub fn probe_header_preview(probe: &ProbeDefinition) -> BTreeMap<String, String> {
    match merge_headers(&probe.headers, None) {
        Ok(map) => header_map_to_pairs(&map),
        Err(_) => BTreeMap::new(),
    }
}
