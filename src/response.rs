// File: response.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;

#[derive(Debug, Clone)]
pub struct ProbeResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl ProbeResponse {
    pub fn new(status: u16, headers: HeaderMap, body: String) -> Self {
        ProbeResponse {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_parts(self) -> (u16, HeaderMap, String) {
        (self.status, self.headers, self.body)
    }
}
