//! Shared test doubles for unit tests
//!
//! [`FakeTransport`] replaces the network with a URL → response table and
//! records every request it receives, so tests can assert on call order and
//! headers deterministically.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::{Error, Result};
use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum Stub {
    Body(Vec<u8>),
    Status(u16),
}

/// Deterministic in-memory [`Transport`] for tests
pub struct FakeTransport {
    stubs: Mutex<HashMap<String, Stub>>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    /// Create an empty fake; unstubbed URLs answer 404
    pub fn new() -> Self {
        Self {
            stubs: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Stub a URL with a raw byte body (status 200)
    pub fn stub_body(&self, url: &str, body: Vec<u8>) {
        self.stubs
            .lock()
            .unwrap()
            .insert(url.to_string(), Stub::Body(body));
    }

    /// Stub a URL with a JSON body (status 200)
    pub fn stub_json(&self, url: &str, value: serde_json::Value) {
        self.stub_body(url, value.to_string().into_bytes());
    }

    /// Stub a URL to fail with the given non-200 status
    pub fn stub_status(&self, url: &str, status: u16) {
        self.stubs
            .lock()
            .unwrap()
            .insert(url.to_string(), Stub::Status(status));
    }

    /// Every request made so far, in order: (url, extra headers)
    pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push((
            url.to_string(),
            headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        ));

        match self.stubs.lock().unwrap().get(url) {
            Some(Stub::Body(body)) => Ok(body.clone()),
            Some(Stub::Status(status)) => Err(Error::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(Error::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
