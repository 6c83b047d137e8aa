// File: headers.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::errors::{ProbeError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Headers handed to the request sender, either already merged or still as
/// the caller's JSON text.
#[derive(Debug, Clone)]
pub enum RequestHeaders {
    Map(HeaderMap),
    Json(String),
}

impl RequestHeaders {
    pub fn resolve(self) -> Result<HeaderMap> {
        match self {
            Self::Map(map) => Ok(map),
            Self::Json(raw) => {
                let custom = parse_header_json(&raw)?;
                merge_headers(&[], Some(&custom))
            }
        }
    }
}

impl From<HeaderMap> for RequestHeaders {
    fn from(map: HeaderMap) -> Self {
        Self::Map(map)
    }
}

/// Parses `{"Name": "value", ...}`. Anything other than an object of
/// string values is rejected.
pub fn parse_header_json(raw: &str) -> Result<BTreeMap<String, String>> {
    let parsed: BTreeMap<String, String> = serde_json::from_str(raw)?;
    Ok(parsed)
}

/// Builds the outgoing header set: fixed entries first, then the caller's
/// entries, which replace fixed ones of the same (case-insensitive) name.
pub fn merge_headers(
    fixed: &[(&str, &str)],
    custom: Option<&BTreeMap<String, String>>,
) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    for (name, value) in fixed {
        insert_header(&mut map, name, value)?;
    }

    if let Some(custom) = custom {
        for (name, value) in custom {
            insert_header(&mut map, name, value)?;
        }
    }

    Ok(map)
}

fn insert_header(map: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ProbeError::InvalidHeaderValue(format!("name '{}': {}", name, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| ProbeError::InvalidHeaderValue(format!("value for '{}': {}", name, e)))?;
    map.insert(name, value);
    Ok(())
}

/// Flattens a header map for logging and reports. Repeated names are joined
/// with ", "; non-UTF-8 values are replaced lossily.
pub fn header_map_to_pairs(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut pairs: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in map.iter() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        pairs
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    pairs
}
