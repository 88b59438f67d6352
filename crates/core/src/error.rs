//! Error types for audit operations.
//!
//! This module defines the main error type [`AuditError`] which represents
//! all possible errors that can occur while validating input, fetching a
//! page, and rendering reports.
//!
//! # Example
//!
//! ```rust
//! use auditus_core::{AuditError, Result};
//!
//! fn require_keyword(keyword: &str) -> Result<()> {
//!     if keyword.trim().is_empty() {
//!         return Err(AuditError::EmptyKeyword);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for audit operations.
///
/// This enum represents all possible errors that can occur during input
/// validation, HTTP fetching, HTML parsing, and report output.
#[derive(Error, Debug)]
pub enum AuditError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// non-success response statuses, and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when the page fetch exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or does not declare an
    /// http/https scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Empty target keyword.
    ///
    /// Returned when the audit keyword is empty after trimming whitespace.
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or a document cannot be
    /// queried.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// PDF construction errors.
    ///
    /// Returned when the PDF report cannot be assembled. The audit result
    /// itself is unaffected; callers treat this as a warning.
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for report output.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for AuditError.
///
/// This is a convenience alias for `std::result::Result<T, AuditError>`.
pub type Result<T> = std::result::Result<T, AuditError>;
