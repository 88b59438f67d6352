//! HTML parsing and element queries.
//!
//! This module provides the [`Document`] and [`Element`] types the
//! extractors operate on, plus [`FetchedPage`], the pairing of raw HTML
//! with its parsed form that one audit run owns.
//!
//! # Example
//!
//! ```rust
//! use auditus_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Shoes</title></head>
//!         <body><img src="a.png" alt="A shoe"></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("Shoes".to_string()));
//! let images = doc.select("img").unwrap();
//! assert_eq!(images[0].attr("alt"), Some("A shoe"));
//! ```

use scraper::{Html, Selector};

use crate::{AuditError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and reading text content.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Malformed markup is tolerated; the parser recovers the way a browser
    /// would.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auditus_core::parse::Document;
    ///
    /// let html = r#"<h1>First</h1><h1>Second</h1>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let headings = doc.select("h1").unwrap();
    /// assert_eq!(headings.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| AuditError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the text of the first `<title>` element if present. An
    /// element that exists but is empty yields `Some("")`.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    ///
    /// Returns the concatenation of every text node, including script and
    /// style bodies; callers that must exclude those strip the tags before
    /// parsing (see [`crate::keywords`]).
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node in the document tree and exposes the
/// two operations the extractors need: text content and attribute lookup.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }
}

/// One fetched page: the raw response body plus its parsed document.
///
/// Owned exclusively by the audit run that created it and discarded after
/// extraction; never persisted.
pub struct FetchedPage {
    /// The response body exactly as received.
    pub raw_html: String,
    document: Document,
}

impl FetchedPage {
    /// Builds a page from HTML already in hand.
    ///
    /// Used by the fetcher after a successful GET, and directly by tests
    /// that exercise the extractors offline.
    pub fn from_html(raw_html: impl Into<String>) -> Result<Self> {
        let raw_html = raw_html.into();
        let document = Document::parse(&raw_html)?;
        Ok(Self { raw_html, document })
    }

    /// The parsed form of [`FetchedPage::raw_html`].
    pub fn document(&self) -> &Document {
        &self.document
    }
}
