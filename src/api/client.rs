use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use super::response::ApiResponse;
use super::types::{Site, SitesPage};
use crate::retry::RetryPolicy;

/// Default NG WAF dashboard API base URL.
pub const DEFAULT_API_URL: &str = "https://dashboard.signalsciences.net/api/v0";

/// Records requested per page.
pub const PAGE_SIZE: usize = 10;

/// Client for the NG WAF dashboard API, authenticated with static
/// credential headers.
pub struct NgwafClient {
    client: Client,
    api_url: String,
    user_email: String,
    token: String,
    retry: RetryPolicy,
}

impl NgwafClient {
    #[tracing::instrument(skip(client, api_url, user_email, token))]
    pub fn new(client: Client, api_url: Option<String>, user_email: &str, token: &str) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            client,
            api_url,
            user_email: user_email.to_string(),
            token: token.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the default retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Performs a single request for one page of the sites listing.
    ///
    /// The returned response carries whatever status the API answered with;
    /// only transport failures produce an `Err`.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_sites_page(
        &self,
        corp: &str,
        page: u32,
        limit: usize,
    ) -> Result<ApiResponse> {
        let url = format!("{}/corps/{}/sites", self.api_url, corp);

        debug!("Fetching sites page {} from {}...", page, url);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page.to_string()), ("limit", limit.to_string())])
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-user", &self.user_email)
            .header("x-api-token", &self.token)
            .send()
            .await
            .context("Failed to send request to NG WAF API")?;

        ApiResponse::from_response(response).await
    }

    /// Retrieves all sites registered under `corp`, in page-arrival order.
    ///
    /// An API failure that survives the retry policy stops the loop and
    /// returns whatever has been accumulated so far, possibly nothing.
    #[tracing::instrument(skip(self))]
    pub async fn list_all_sites(&self, corp: &str) -> Result<Vec<Site>> {
        let mut sites = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .retry
                .run("Fetching sites", || {
                    self.fetch_sites_page(corp, page, PAGE_SIZE)
                })
                .await?;

            if response.status() != StatusCode::OK {
                warn!(
                    "Failed to retrieve sites: status {} - details: {}",
                    response.status().as_u16(),
                    response.text()
                );
                break;
            }

            let parsed: SitesPage = response.json()?;
            if parsed.data.is_empty() {
                break;
            }

            let count = parsed.data.len();
            sites.extend(parsed.data);
            page += 1;

            // A short page is the last page.
            if count < PAGE_SIZE {
                break;
            }
        }

        Ok(sites)
    }
}
