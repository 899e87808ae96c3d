// src/checks/cors.rs
use reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN;

use super::CheckResult;
use crate::probe::{ProbeError, ProbeResponse};

const NAME: &str = "cors";

/// Pass iff the preflight response names an allowed origin. Only
/// presence of the header matters, not its value or the status code.
/// `HeaderMap` compares names case-insensitively, so any casing on
/// the wire counts.
pub(super) fn evaluate(outcome: Result<ProbeResponse, ProbeError>) -> CheckResult {
    match outcome {
        Ok(response) if response.headers.contains_key(ACCESS_CONTROL_ALLOW_ORIGIN) => {
            CheckResult::pass(NAME, "CORS headers present")
        }
        Ok(_) => CheckResult::fail(NAME, "CORS headers missing"),
        Err(error) => CheckResult::fail(NAME, format!("CORS check error: {}", error)),
    }
}
