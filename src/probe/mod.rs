// src/probe/mod.rs
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use reqwest::{Client, Method, StatusCode};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Transport-level failure, classified for reporting.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Status line and headers of a completed exchange. The body is
/// never read; responses are judged on metadata alone.
#[derive(Debug)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Thin wrapper around the HTTP client. Callers branch on the
/// returned result instead of handling raw client errors.
pub struct Probe {
    client: Client,
    timeout: Duration,
}

impl Probe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Plain GET with no body and no custom headers.
    pub async fn get(&self, url: &Url) -> Result<ProbeResponse, ProbeError> {
        self.execute(self.client.get(url.as_str())).await
    }

    /// CORS preflight: OPTIONS carrying the origin and the method
    /// the browser would request.
    pub async fn preflight(
        &self,
        url: &Url,
        origin: &str,
        request_method: &str,
    ) -> Result<ProbeResponse, ProbeError> {
        let request = self
            .client
            .request(Method::OPTIONS, url.as_str())
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, request_method);

        self.execute(request).await
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ProbeResponse, ProbeError> {
        let start = Instant::now();
        let result = request.send().await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                debug!(
                    "Probe completed in {} ms: HTTP {}",
                    elapsed_ms,
                    response.status()
                );
                Ok(ProbeResponse {
                    status: response.status(),
                    headers: response.headers().clone(),
                })
            }
            Err(e) => {
                debug!("Probe failed after {} ms: {}", elapsed_ms, e);
                Err(self.classify(e))
            }
        }
    }

    fn classify(&self, error: reqwest::Error) -> ProbeError {
        if error.is_timeout() {
            ProbeError::Timeout(self.timeout)
        } else if error.is_connect() {
            ProbeError::Connect(root_cause(&error))
        } else {
            ProbeError::Transport(root_cause(&error))
        }
    }
}

/// Innermost source of the error chain. The client's top-level
/// message repeats the URL and request phase; the root cause is the
/// part worth showing ("Connection refused (os error 111)").
fn root_cause(error: &reqwest::Error) -> String {
    let mut source: &dyn std::error::Error = error;
    while let Some(inner) = source.source() {
        source = inner;
    }
    source.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_the_limit() {
        let error = ProbeError::Timeout(Duration::from_secs(10));
        assert_eq!(error.to_string(), "request timed out after 10s");
    }

    #[test]
    fn connect_message_carries_the_cause() {
        let error = ProbeError::Connect("Connection refused (os error 111)".to_string());
        assert!(error.to_string().contains("Connection refused"));
    }
}
