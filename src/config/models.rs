// src/config/models.rs
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_HEALTH_PATH: &str = "/health";
const DEFAULT_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_REQUEST_METHOD: &str = "POST";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Probe target description. The defaults match the local dev
/// setup: backend on port 8000, frontend dev server on port 8080.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend under test.
    pub base_url: Url,

    /// Path of the health endpoint, joined onto `base_url`.
    pub health_path: String,

    /// Origin sent with the CORS preflight.
    pub origin: String,

    /// Method named in the `Access-Control-Request-Method` header.
    pub request_method: String,

    /// Per-request timeout in seconds. Applied explicitly to the
    /// HTTP client rather than relying on its implicit default.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            request_method: DEFAULT_REQUEST_METHOD.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => bail!("Unsupported base URL scheme: {}", other),
        }
        if !self.health_path.starts_with('/') {
            bail!("health_path must start with '/': {}", self.health_path);
        }
        if self.origin.is_empty() {
            bail!("origin must not be empty");
        }
        if self.request_method.is_empty() {
            bail!("request_method must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> Result<Url> {
        self.base_url
            .join(&self.health_path)
            .context("Failed to build health endpoint URL")
    }
}
