// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use smugprobe::config::ScanConfig;
use std::sync::{Mutex, Once};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub async fn mount_static(server: &MockServer, status: u16, body: &str) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_reflector(server: &MockServer) {
    Mock::given(any())
        .respond_with(ReflectRequest)
        .mount(server)
        .await;
}

pub async fn received_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

pub fn scan_config(url: &str) -> ScanConfig {
    ScanConfig::new(url).with_timeout(Duration::from_secs(5))
}

/// Echoes the request headers and body back, the way a poisoned backend
/// would surface a smuggled prefix.
pub struct ReflectRequest;

impl Respond for ReflectRequest {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body = String::new();
        for (name, value) in request.headers.iter() {
            body.push_str(name.as_str());
            body.push_str(": ");
            body.push_str(&String::from_utf8_lossy(value.as_bytes()));
            body.push_str("\r\n");
        }
        body.push_str("\r\n");
        body.push_str(&String::from_utf8_lossy(&request.body));
        ResponseTemplate::new(200).set_body_string(body)
    }
}

static CAPTURED: Lazy<Mutex<Vec<(Level, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));
static LOGGER_INIT: Once = Once::new();

/// Keeps every record the crate emits so tests can assert on log output.
struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("smugprobe")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;

/// Installs the recording logger once per test binary and clears earlier
/// records. Pair with `#[serial]`.
pub fn capture_logs() {
    LOGGER_INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.lock().unwrap().clear();
}

pub fn logged(level: Level) -> Vec<String> {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, msg)| msg.clone())
        .collect()
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match tokio::time::timeout(Duration::from_millis(300), stream.read(&mut chunk)).await {
            Ok(Ok(0)) | Ok(Err(_)) | Err(_) => break,
            Ok(Ok(n)) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.ends_with(b"\r\n0\r\n\r\n") {
                    break;
                }
            }
        }
    }
    buf
}

/// Plain TCP server answering every request with its own header section,
/// exactly as it arrived on the wire. The request body is not echoed.
pub async fn spawn_head_echo_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let raw = read_request(&mut stream).await;
                let raw = String::from_utf8_lossy(&raw).into_owned();
                let head = raw.split("\r\n\r\n").next().unwrap_or("").to_string();
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    head.len(),
                    head
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });
    format!("http://{}", addr)
}

/// Plain TCP server that sends the response body in pieces with a pause
/// between each one.
pub async fn spawn_trickle_server(pieces: Vec<&'static str>, gap: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let pieces = pieces.clone();
            tokio::spawn(async move {
                read_request(&mut stream).await;
                let total: usize = pieces.iter().map(|p| p.len()).sum();
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    total
                );
                if stream.write_all(head.as_bytes()).await.is_err() {
                    return;
                }
                for piece in pieces {
                    tokio::time::sleep(gap).await;
                    if stream.write_all(piece.as_bytes()).await.is_err() {
                        return;
                    }
                    let _ = stream.flush().await;
                }
                let _ = stream.shutdown().await;
            });
        }
    });
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_setup() {
        let server = setup_mock_server().await;
        assert!(!server.uri().is_empty());
        assert_eq!(received_count(&server).await, 0);
    }
}
