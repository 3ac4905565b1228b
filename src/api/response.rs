//! Fully-buffered API response.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// An NG WAF API response drained into memory.
///
/// The retry policy and the pagination driver both signal failure by
/// inspecting the status of the response they are handed, so the body has
/// to stay readable after the status check; `reqwest::Response` only allows
/// a single read.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Drains a live response into an owned one.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body from NG WAF API")?;
        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parses the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).context("Failed to parse JSON response from NG WAF API")
    }
}
