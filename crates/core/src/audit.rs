//! Audit orchestration and the assembled report.
//!
//! [`AuditReport`] is a pure merge of the extractor outputs and needs no
//! network access; [`Auditor`] drives the full fetch, extract, enrich,
//! assemble pipeline.

use chrono::{DateTime, Local};
use serde::Serialize;

#[cfg(feature = "fetch")]
use reqwest::Client;

use crate::Result;
#[cfg(feature = "fetch")]
use crate::fetch::{self, FetchConfig};
use crate::headings::{self, HeadingAnalysis};
use crate::images::{self, ImageAnalysis};
use crate::keywords::{self, KeywordFrequency};
use crate::metadata;
#[cfg(feature = "fetch")]
use crate::pagespeed::PageSpeedConfig;
use crate::pagespeed::PerformanceInsight;
use crate::parse::FetchedPage;
use crate::schema::{self, SchemaAnalysis};
use crate::target::AuditTarget;

/// Everything a single audit run learned about a page.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub keyword: String,
    /// Host with any leading `www.` stripped.
    pub domain: String,
    pub audited_at: DateTime<Local>,
    pub title: String,
    pub meta_description: String,
    pub keyword_frequency: KeywordFrequency,
    pub headings: HeadingAnalysis,
    pub images: ImageAnalysis,
    pub schema: SchemaAnalysis,
    /// Absent when no API key was supplied or the enrichment call failed.
    pub performance: Option<PerformanceInsight>,
}

impl AuditReport {
    /// Runs every extractor over a fetched page and merges the results.
    pub fn assemble(
        target: &AuditTarget,
        page: &FetchedPage,
        performance: Option<PerformanceInsight>,
    ) -> Result<Self> {
        let document = page.document();

        Ok(Self {
            url: target.url().to_string(),
            keyword: target.keyword().to_string(),
            domain: target.domain(),
            audited_at: Local::now(),
            title: metadata::extract_title(document),
            meta_description: metadata::extract_meta_description(document),
            keyword_frequency: keywords::keyword_frequency(&page.raw_html, target.keyword())?,
            headings: headings::analyze_headings(document)?,
            images: images::analyze_images(document)?,
            schema: schema::analyze_schema(document)?,
            performance,
        })
    }

    /// Filename the PDF presenter writes, derived from the domain.
    pub fn report_filename(&self) -> String {
        format!("SEO_Audit_Report_{}.pdf", self.domain)
    }

    /// Audit timestamp in `YYYY-MM-DD HH:MM:SS` form.
    pub fn formatted_date(&self) -> String {
        self.audited_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Drives a complete audit against one target at a time.
///
/// Holds the single HTTP client a session shares between the page fetch
/// and the PageSpeed call. The API key lives in memory only and is never
/// persisted.
#[cfg(feature = "fetch")]
pub struct Auditor {
    client: Client,
    fetch_config: FetchConfig,
    pagespeed_config: PageSpeedConfig,
    api_key: Option<String>,
}

#[cfg(feature = "fetch")]
impl Auditor {
    /// Creates an auditor with default fetch and PageSpeed settings.
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default(), PageSpeedConfig::default())
    }

    /// Creates an auditor with explicit settings.
    pub fn with_config(fetch_config: FetchConfig, pagespeed_config: PageSpeedConfig) -> Result<Self> {
        let client = fetch::build_client(&fetch_config)?;
        Ok(Self { client, fetch_config, pagespeed_config, api_key: None })
    }

    /// Stores the PageSpeed API key for the rest of the session.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// Whether a PageSpeed API key has been set.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches the page, runs the extractors, and optionally enriches the
    /// result with performance data.
    ///
    /// Enrichment is skipped without an API key, and an enrichment failure
    /// never fails the audit.
    pub async fn audit(&self, target: &AuditTarget) -> Result<AuditReport> {
        let page = fetch::fetch_page(&self.client, target.url(), &self.fetch_config).await?;

        let performance = match &self.api_key {
            Some(key) => {
                crate::pagespeed::fetch_insights(&self.client, &self.pagespeed_config, target.url(), key).await
            }
            None => None,
        };

        AuditReport::assemble(target, &page, performance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP_PAGE: &str = r#"
        <html>
            <head>
                <title>Buy Shoes</title>
                <meta name="description" content="The best shoes in town.">
            </head>
            <body>
                <h1>Shoes for Every Season</h1>
                <p>Our shoes are made to last. Browse the shoes collection today.</p>
                <img src="hero.png" alt="A running shoe">
                <img src="banner.png">
            </body>
        </html>
    "#;

    fn shop_report() -> AuditReport {
        let target = AuditTarget::new("https://www.shoes-example.com/shop", "shoes").unwrap();
        let page = FetchedPage::from_html(SHOP_PAGE).unwrap();
        AuditReport::assemble(&target, &page, None).unwrap()
    }

    #[test]
    fn test_assemble_merges_all_extractors() {
        let report = shop_report();

        assert_eq!(report.url, "https://www.shoes-example.com/shop");
        assert_eq!(report.keyword, "shoes");
        assert_eq!(report.domain, "shoes-example.com");
        assert_eq!(report.title, "Buy Shoes");
        assert_eq!(report.meta_description, "The best shoes in town.");
        assert_eq!(report.keyword_frequency.total, 4);
        assert_eq!(report.keyword_frequency.title, 1);
        assert_eq!(report.keyword_frequency.headings, 1);
        assert_eq!(report.keyword_frequency.body, 2);
        assert_eq!(report.headings.count, 1);
        assert_eq!(report.images.total, 2);
        assert_eq!(report.images.with_alt, 1);
        assert!(report.performance.is_none());
    }

    #[test]
    fn test_report_filename_from_domain() {
        let report = shop_report();
        assert_eq!(report.report_filename(), "SEO_Audit_Report_shoes-example.com.pdf");
    }

    #[test]
    fn test_formatted_date_shape() {
        let report = shop_report();
        let date = report.formatted_date();
        assert_eq!(date.len(), 19);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[13], b':');
    }

    #[test]
    fn test_assemble_keeps_performance() {
        let target = AuditTarget::new("https://example.com", "x").unwrap();
        let page = FetchedPage::from_html("<html><body></body></html>").unwrap();
        let insight = PerformanceInsight { score: 88, fcp_display: "1.0 s".to_string(), fcp_millis: 1000.0 };

        let report = AuditReport::assemble(&target, &page, Some(insight.clone())).unwrap();
        assert_eq!(report.performance, Some(insight));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_auditor_api_key_lifecycle() {
        let mut auditor = Auditor::new().unwrap();
        assert!(!auditor.has_api_key());

        auditor.set_api_key("test-key");
        assert!(auditor.has_api_key());
    }
}
