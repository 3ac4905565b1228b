//! Bounded retry policy for NG WAF API calls.

use std::time::Duration;

use anyhow::Result;
use log::warn;
use reqwest::StatusCode;

use crate::api::response::ApiResponse;

/// Maximum number of attempts for one API call.
pub const MAX_RETRIES: usize = 3;

/// Delay between attempts.
pub const RETRY_WAIT: Duration = Duration::from_secs(10);

/// Retry policy applicable to any single-page fetch operation.
///
/// API failure is signaled through the returned response's status, never
/// through `Err`: a 401 comes back immediately without retrying, and once
/// the attempts are exhausted the last failing response comes back as-is.
/// Transport errors still propagate as `Err`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            wait: RETRY_WAIT,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: usize, wait: Duration) -> Self {
        Self { max_retries, wait }
    }

    /// Runs `operation` until it yields a 200, a 401, or `max_retries`
    /// attempts have been made.
    pub async fn run<F, Fut>(&self, operation_name: &str, operation: F) -> Result<ApiResponse>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<ApiResponse>>,
    {
        let mut retries = 0;

        loop {
            let response = operation().await?;

            match response.status() {
                StatusCode::OK => return Ok(response),
                StatusCode::UNAUTHORIZED => {
                    warn!(
                        "{}: failed with Unauthorized (401), no retry will be attempted",
                        operation_name
                    );
                    return Ok(response);
                }
                status => {
                    retries += 1;
                    let details = if response.text().is_empty() {
                        "No additional error message provided"
                    } else {
                        response.text()
                    };
                    warn!(
                        "{}: failed with status {} ({}), retrying in {:?}... (retry {}/{})",
                        operation_name,
                        status.as_u16(),
                        details,
                        self.wait,
                        retries,
                        self.max_retries
                    );
                    tokio::time::sleep(self.wait).await;

                    if retries >= self.max_retries {
                        return Ok(response);
                    }
                }
            }
        }
    }
}
