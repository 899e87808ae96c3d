// src/checks/health.rs
use reqwest::StatusCode;

use super::CheckResult;
use crate::probe::{ProbeError, ProbeResponse};

const NAME: &str = "health";

/// Pass iff the endpoint answered 200. The response body is
/// irrelevant, as is any other success-ish status.
pub(super) fn evaluate(outcome: Result<ProbeResponse, ProbeError>) -> CheckResult {
    match outcome {
        Ok(response) if response.status == StatusCode::OK => {
            CheckResult::pass(NAME, "Health check passed")
        }
        Ok(response) => CheckResult::fail(
            NAME,
            format!("Health check failed: HTTP {}", response.status),
        ),
        Err(error) => CheckResult::fail(NAME, format!("Health check error: {}", error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use std::time::Duration;

    fn response(status: StatusCode) -> ProbeResponse {
        ProbeResponse {
            status,
            headers: HeaderMap::new(),
        }
    }

    #[test]
    fn ok_status_passes() {
        let result = evaluate(Ok(response(StatusCode::OK)));
        assert!(result.passed);
    }

    #[test]
    fn failing_status_is_reported() {
        let result = evaluate(Ok(response(StatusCode::SERVICE_UNAVAILABLE)));
        assert!(!result.passed);
        assert!(result.message.contains("503"));
    }

    #[test]
    fn other_success_statuses_do_not_count() {
        let result = evaluate(Ok(response(StatusCode::CREATED)));
        assert!(!result.passed);
    }

    #[test]
    fn transport_error_becomes_a_failed_result() {
        let result = evaluate(Err(ProbeError::Timeout(Duration::from_secs(10))));
        assert!(!result.passed);
        assert!(result.message.contains("timed out"));
    }
}
