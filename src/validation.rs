// File: validation.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use url::Url;

/// Accepts only absolute URLs carrying both a scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
