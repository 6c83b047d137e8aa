// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::probes::ProbeDefinition;
use crate::scanner::{probe_header_preview, ProbeOutcome, ScanReport};
use anyhow::Result;
use colored::*;
use std::fmt::Write;

pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))
}

pub fn render_summary(report: &ScanReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nScan Summary");
    let _ = writeln!(out, "================");
    let _ = writeln!(out, "Target: {} ({})", report.target, report.method);

    for result in &report.results {
        let verdict = match result.outcome {
            ProbeOutcome::Detected => "VULNERABLE".red().bold(),
            ProbeOutcome::NotDetected => "clean".green(),
            ProbeOutcome::Skipped => "skipped".yellow(),
        };
        let status = result
            .status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let _ = writeln!(
            out,
            "  {:<6} {:<10} status {:<4} {} ms",
            result.name(),
            verdict,
            status,
            result.elapsed_ms
        );
    }

    let verdict = if report.vulnerable {
        "Potential HTTP request smuggling detected".bright_red().bold()
    } else {
        "No immediate vulnerabilities found".green()
    };
    let _ = writeln!(out, "{} ({} ms)", verdict, report.duration_ms());
    out
}

pub fn render_probe_catalogue(probes: &[ProbeDefinition]) -> String {
    let mut out = String::new();
    for (idx, probe) in probes.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", idx + 1, probe.name().bold());
        for (name, value) in probe_header_preview(probe) {
            let _ = writeln!(out, "   {}: {}", name, value);
        }
        let _ = writeln!(out, "   body: {:?}", probe.body);
        let _ = writeln!(out, "   sentinel: {:?}", probe.sentinel);
    }
    out
}
