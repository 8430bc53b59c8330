//! Injected HTTP fetch capability
//!
//! The pipeline never talks to the network directly; it depends on the
//! [`Transport`] trait so tests can substitute a deterministic fake. The
//! production implementation is [`HttpTransport`], a thin wrapper over a
//! shared [`reqwest::Client`].

use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;

/// Asynchronous fetch capability: one GET, one attempt, raw bytes back
///
/// Implementations must make exactly one attempt per call (no retries) and
/// fail when the request errors at the transport level or returns a status
/// other than 200. Bodies are always returned as raw bytes so binary content
/// is never corrupted by text decoding; callers that expect JSON parse it
/// themselves.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` with the given extra headers, returning the response body
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>>;
}

/// Production transport backed by a shared [`reqwest::Client`]
///
/// The client carries the configured User-Agent and per-request timeout;
/// both apply uniformly to listing fetches and raw content downloads.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the pipeline configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
