// src/checks/checker.rs
use crate::config::Config;
use crate::probe::Probe;
use crate::report;
use anyhow::Result;
use tracing::{debug, warn};
use url::Url;

use super::{cors, health};

/// Outcome of a single probe.
#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub(super) fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            message: message.into(),
        }
    }

    pub(super) fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            message: message.into(),
        }
    }
}

/// Runs the readiness probes against one backend.
pub struct Checker {
    probe: Probe,
    health_url: Url,
    origin: String,
    request_method: String,
}

impl Checker {
    pub fn new(config: &Config) -> Result<Self> {
        let probe = Probe::new(config.timeout())?;
        let health_url = config.health_url()?;

        Ok(Self {
            probe,
            health_url,
            origin: config.origin.clone(),
            request_method: config.request_method.clone(),
        })
    }

    /// Run every check strictly in order, printing each result line
    /// as it lands. A failure never short-circuits: the remaining
    /// checks still run.
    pub async fn run_all(&self) -> Vec<CheckResult> {
        let health = self.check_health().await;
        println!("{}", report::render_check_line(&health));

        let cors = self.check_cors().await;
        println!("{}", report::render_check_line(&cors));

        vec![health, cors]
    }

    async fn check_health(&self) -> CheckResult {
        debug!("GET {}", self.health_url);
        let outcome = self.probe.get(&self.health_url).await;
        let result = health::evaluate(outcome);
        if !result.passed {
            warn!("{}", result.message);
        }
        result
    }

    async fn check_cors(&self) -> CheckResult {
        debug!(
            "OPTIONS {} (origin: {}, method: {})",
            self.health_url, self.origin, self.request_method
        );
        let outcome = self
            .probe
            .preflight(&self.health_url, &self.origin, &self.request_method)
            .await;
        let result = cors::evaluate(outcome);
        if !result.passed {
            warn!("{}", result.message);
        }
        result
    }
}
