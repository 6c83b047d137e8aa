// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::errors::{ProbeError, Result};
use crate::headers::{header_map_to_pairs, RequestHeaders};
use crate::response::ProbeResponse;
use log::{error, info};
use reqwest::{redirect, Method};
use std::time::Duration;

/// Everything needed to fire one request.
#[derive(Debug, Clone)]
pub struct OutgoingRequest<'a> {
    pub url: &'a str,
    pub method: &'a str,
    pub body: Option<&'a str>,
    pub headers: RequestHeaders,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct RequestSender {
    client: reqwest::Client,
}

impl RequestSender {
    /// `timeout` bounds connecting and each individual read, not the whole
    /// exchange. Header names keep their title case on the wire.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .http1_title_case_headers()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .map_err(|e| ProbeError::ClientBuild(e.to_string()))?;
        Ok(RequestSender { client })
    }

    /// Sends the request once. Every failure is logged here and comes back
    /// as `None`; nothing is retried.
    pub async fn send(&self, request: OutgoingRequest<'_>) -> Option<ProbeResponse> {
        match self.try_send(request).await {
            Ok(response) => Some(response),
            Err(
                e @ (ProbeError::InvalidHeaders(_)
                | ProbeError::InvalidHeaderValue(_)
                | ProbeError::Transport(_)
                | ProbeError::HttpStatus(_)),
            ) => {
                error!("{}", e);
                None
            }
            Err(e) => {
                error!("An unexpected error occurred: {}", e);
                None
            }
        }
    }

    async fn try_send(&self, request: OutgoingRequest<'_>) -> Result<ProbeResponse> {
        let headers = request.headers.resolve()?;
        let method = parse_method(request.method)?;

        if request.verbose {
            info!("Sending {} request to: {}", method, request.url);
            if let Some(body) = request.body {
                info!("Data: {:?}", body);
            }
            if !headers.is_empty() {
                info!("Headers: {:?}", header_map_to_pairs(&headers));
            }
        }

        let mut builder = self
            .client
            .request(method, request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body.to_string());
        }

        let resp = builder.send().await?.error_for_status()?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .text()
            .await
            .map_err(|e| ProbeError::Body(e.to_string()))?;

        if request.verbose {
            info!("Received response with status code: {}", status);
            info!("Response headers: {:?}", header_map_to_pairs(&headers));
            info!("Response content: {}", body);
        }

        Ok(ProbeResponse::new(status, headers, body))
    }
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.trim().to_uppercase().as_bytes())
        .map_err(|_| ProbeError::InvalidMethod(method.to_string()))
}
