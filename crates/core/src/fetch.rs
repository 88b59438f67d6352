//! Page fetching over HTTP.
//!
//! This module builds the single HTTP client an audit session shares
//! between the page fetch and the PageSpeed enrichment call, and performs
//! the one GET request an audit run needs.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::parse::FetchedPage;
use crate::{AuditError, Result};

/// User-Agent sent with the page fetch when none is configured.
///
/// A browser-identifying string; several sites serve reduced or blocked
/// responses to obvious bot agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for the page fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: BROWSER_USER_AGENT.to_string() }
    }
}

/// Builds the shared HTTP client.
///
/// The client carries the configured User-Agent as a default header and the
/// page-fetch timeout; the enrichment call reuses the same client with a
/// longer per-request timeout.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;

    Ok(client)
}

/// Fetches one page and parses it.
///
/// Performs a single GET request (redirects followed). On a non-success
/// status the audit is aborted; there are no retries.
///
/// # Errors
///
/// Returns [`AuditError::Timeout`] when the request exceeds the configured
/// timeout and [`AuditError::HttpError`] for every other network failure or
/// non-2xx status.
pub async fn fetch_page(client: &Client, url: &Url, config: &FetchConfig) -> Result<FetchedPage> {
    debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AuditError::Timeout { timeout: config.timeout }
            } else {
                AuditError::HttpError(e)
            }
        })?;

    let response = response.error_for_status()?;
    let raw_html = response.text().await?;

    FetchedPage::from_html(raw_html)
}
