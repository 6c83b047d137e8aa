// File: probes.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Marker carried by every smuggled request.
pub const SENTINEL: &str = "X-Foo: bar";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    #[serde(rename = "CL.TE")]
    ClTe,
    #[serde(rename = "TE.CL")]
    TeCl,
    #[serde(rename = "TE.TE")]
    TeTe,
}

impl ProbeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProbeKind::ClTe => "CL.TE",
            ProbeKind::TeCl => "TE.CL",
            ProbeKind::TeTe => "TE.TE",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeDefinition {
    pub kind: ProbeKind,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: &'static str,
    pub sentinel: &'static str,
}

impl ProbeDefinition {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn matches(&self, body: &str) -> bool {
        body.contains(self.sentinel)
    }
}

static PROBES: Lazy<Vec<ProbeDefinition>> = Lazy::new(|| {
    vec![
        ProbeDefinition {
            kind: ProbeKind::ClTe,
            headers: vec![("Content-Length", "41"), ("Transfer-Encoding", "chunked")],
            body: "0\r\n\r\nGET / HTTP/1.1\r\nX-Foo: bar\r\n\r\n",
            sentinel: SENTINEL,
        },
        ProbeDefinition {
            kind: ProbeKind::TeCl,
            headers: vec![("Transfer-Encoding", "chunked"), ("Content-Length", "100")],
            body: "5c\r\nGET / HTTP/1.1\r\nHost: example.com\r\nContent-Length: 10\r\nX-Foo: bar\r\n\r\n0\r\n\r\n",
            sentinel: SENTINEL,
        },
        ProbeDefinition {
            kind: ProbeKind::TeTe,
            headers: vec![("Transfer-Encoding", "chunked, chunked")],
            body: "0\r\n\r\nGET / HTTP/1.1\r\nX-Foo: bar\r\n\r\n",
            sentinel: SENTINEL,
        },
    ]
});

/// Probes in the order they are fired.
pub fn default_probes() -> &'static [ProbeDefinition] {
    &PROBES
}
