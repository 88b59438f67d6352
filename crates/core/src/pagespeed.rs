//! Performance enrichment via the Google PageSpeed Insights API.
//!
//! Enrichment is strictly best effort: every failure path logs a warning
//! and yields `None`, and the audit carries on without performance data.

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
#[cfg(feature = "fetch")]
use tracing::{debug, warn};
#[cfg(feature = "fetch")]
use url::Url;

/// PageSpeed Insights v5 endpoint.
pub const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Settings for the PageSpeed Insights call.
#[derive(Debug, Clone)]
pub struct PageSpeedConfig {
    /// API endpoint, overridable for tests.
    pub endpoint: String,
    /// Request timeout in seconds. Lighthouse runs are slow, so this is
    /// longer than the page-fetch timeout.
    pub timeout: u64,
}

impl Default for PageSpeedConfig {
    fn default() -> Self {
        Self { endpoint: PAGESPEED_ENDPOINT.to_string(), timeout: 60 }
    }
}

/// Performance numbers recovered from a PageSpeed Insights response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceInsight {
    /// Lighthouse performance score rescaled to 0..=100.
    pub score: u8,
    /// Human-readable first contentful paint, e.g. "1.2 s".
    pub fcp_display: String,
    /// First contentful paint in milliseconds.
    pub fcp_millis: f64,
}

/// Requests performance data for `url`.
///
/// Issues one GET with the target URL, the API key, and a category filter.
/// The shared client's default timeout is overridden per request because
/// Lighthouse analysis routinely takes longer than a page fetch.
#[cfg(feature = "fetch")]
pub async fn fetch_insights(
    client: &Client,
    config: &PageSpeedConfig,
    url: &Url,
    api_key: &str,
) -> Option<PerformanceInsight> {
    debug!("Requesting PageSpeed insights for {}", url);

    let response = client
        .get(&config.endpoint)
        .query(&[("url", url.as_str()), ("key", api_key), ("category", "performance")])
        .timeout(Duration::from_secs(config.timeout))
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            warn!("PageSpeed request failed: {}", e);
            return None;
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            warn!("PageSpeed API rejected the request: {}", e);
            return None;
        }
    };

    let data = match response.json::<Value>().await {
        Ok(data) => data,
        Err(e) => {
            warn!("PageSpeed response was not valid JSON: {}", e);
            return None;
        }
    };

    parse_insights(&data)
}

/// Digs the performance score and first-contentful-paint audit out of a raw
/// API response.
///
/// Returns `None` when the response carries no `lighthouseResult` at all.
/// Within a present result, a missing or zero score maps to 0 and missing
/// FCP fields fall back to `"N/A"` and `0.0`.
pub fn parse_insights(data: &Value) -> Option<PerformanceInsight> {
    let lighthouse = data.get("lighthouseResult")?;

    let score = lighthouse
        .pointer("/categories/performance/score")
        .and_then(Value::as_f64)
        .map(|s| (s * 100.0) as u8)
        .unwrap_or(0);

    let fcp = lighthouse.pointer("/audits/first-contentful-paint");
    let fcp_display = fcp
        .and_then(|audit| audit.get("displayValue"))
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string();
    let fcp_millis = fcp
        .and_then(|audit| audit.get("numericValue"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    Some(PerformanceInsight { score, fcp_display, fcp_millis })
}
