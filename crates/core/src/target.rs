//! Audit target validation.
//!
//! An [`AuditTarget`] pairs the page URL with the keyword under analysis.
//! Both are validated up front so no network call is ever attempted with
//! malformed input.

use url::Url;

use crate::{AuditError, Result};

/// A validated audit request: one URL, one keyword.
///
/// Immutable once created. The URL is guaranteed to carry an http or https
/// scheme and the keyword is guaranteed to be non-empty.
///
/// # Example
///
/// ```rust
/// use auditus_core::AuditTarget;
///
/// let target = AuditTarget::new("https://www.example.com/shop", "shoes").unwrap();
/// assert_eq!(target.keyword(), "shoes");
/// assert_eq!(target.domain(), "example.com");
/// ```
#[derive(Debug, Clone)]
pub struct AuditTarget {
    url: Url,
    keyword: String,
}

impl AuditTarget {
    /// Validates user input and builds a target.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidUrl`] when the URL does not start with
    /// `http://` or `https://` or fails to parse, and
    /// [`AuditError::EmptyKeyword`] when the keyword is empty after
    /// trimming.
    pub fn new(url: &str, keyword: &str) -> Result<Self> {
        let url = url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AuditError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let url = Url::parse(url).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AuditError::EmptyKeyword);
        }

        Ok(Self { url, keyword: keyword.to_string() })
    }

    /// The validated page URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The keyword whose frequency is analyzed.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The URL host with a leading `www.` stripped.
    ///
    /// Used to derive the report filename.
    pub fn domain(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        host.strip_prefix("www.").unwrap_or(host).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_target() {
        let target = AuditTarget::new("https://example.com", "rust").unwrap();
        assert_eq!(target.url().as_str(), "https://example.com/");
        assert_eq!(target.keyword(), "rust");
    }

    #[test]
    fn test_missing_scheme_rejected() {
        let result = AuditTarget::new("example.com", "rust");
        assert!(matches!(result, Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_other_scheme_rejected() {
        let result = AuditTarget::new("ftp://example.com", "rust");
        assert!(matches!(result, Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let result = AuditTarget::new("https://", "rust");
        assert!(matches!(result, Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let result = AuditTarget::new("https://example.com", "   ");
        assert!(matches!(result, Err(AuditError::EmptyKeyword)));
    }

    #[test]
    fn test_keyword_trimmed() {
        let target = AuditTarget::new("https://example.com", "  shoes  ").unwrap();
        assert_eq!(target.keyword(), "shoes");
    }

    #[test]
    fn test_domain_strips_leading_www() {
        let target = AuditTarget::new("https://www.example.com/page", "x").unwrap();
        assert_eq!(target.domain(), "example.com");
    }

    #[test]
    fn test_domain_keeps_inner_www() {
        let target = AuditTarget::new("https://shop.www-spares.com", "x").unwrap();
        assert_eq!(target.domain(), "shop.www-spares.com");
    }
}
