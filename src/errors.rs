// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    InvalidHeaders(String),
    InvalidHeaderValue(String),
    InvalidMethod(String),
    Transport(reqwest::Error),
    HttpStatus(u16),
    Body(String),
    ClientBuild(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeaders(msg) => write!(f, "Invalid JSON format for headers: {}", msg),
            Self::InvalidHeaderValue(msg) => write!(f, "Invalid header: {}", msg),
            Self::InvalidMethod(method) => write!(f, "Invalid HTTP method: {}", method),
            Self::Transport(e) => write!(f, "Request failed: {}", e),
            Self::HttpStatus(status) => write!(f, "Request failed with status code {}", status),
            Self::Body(msg) => write!(f, "Failed to read body: {}", msg),
            Self::ClientBuild(msg) => write!(f, "Failed to build HTTP client: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::InvalidHeaders(_) => None,
            Self::InvalidHeaderValue(_) => None,
            Self::InvalidMethod(_) => None,
            Self::HttpStatus(_) => None,
            Self::Body(_) => None,
            Self::ClientBuild(_) => None,
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidHeaders(error.to_string())
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::HttpStatus(status.as_u16()),
            None => Self::Transport(error),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
