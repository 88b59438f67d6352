pub mod audit;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod headings;
pub mod images;
pub mod keywords;
pub mod metadata;
pub mod pagespeed;
pub mod parse;
pub mod schema;
pub mod target;

pub use audit::AuditReport;
#[cfg(feature = "fetch")]
pub use audit::Auditor;
pub use error::{AuditError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{BROWSER_USER_AGENT, FetchConfig, build_client, fetch_page};
pub use formatters::render_text;
#[cfg(feature = "pdf")]
pub use formatters::{PdfConfig, write_pdf_report};
pub use headings::{HeadingAnalysis, HeadingStatus, analyze_headings};
pub use images::{ImageAnalysis, analyze_images};
pub use keywords::{KeywordFrequency, keyword_frequency};
pub use metadata::{NO_DESCRIPTION_FALLBACK, NO_TITLE_FALLBACK, extract_meta_description, extract_title};
#[cfg(feature = "fetch")]
pub use pagespeed::fetch_insights;
pub use pagespeed::{PAGESPEED_ENDPOINT, PageSpeedConfig, PerformanceInsight, parse_insights};
pub use parse::{Document, Element, FetchedPage};
pub use schema::{SchemaAnalysis, analyze_schema};
pub use target::AuditTarget;
