use std::fmt;

use serde::Serialize;

use crate::Result;
use crate::parse::Document;

/// Verdict on a page's H1 usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingStatus {
    /// No H1 tag on the page.
    Missing,
    /// Exactly one H1 tag.
    Good,
    /// More than one H1 tag.
    Warning,
}

impl fmt::Display for HeadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing"),
            Self::Good => write!(f, "Good"),
            Self::Warning => {
                write!(f, "Warning | It is generally recommended to only use one H1 Tag on a page.")
            }
        }
    }
}

/// H1 inventory for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAnalysis {
    pub count: usize,
    /// Trimmed H1 texts in document order.
    pub texts: Vec<String>,
    pub status: HeadingStatus,
}

/// Collects every H1 tag and grades the count.
pub fn analyze_headings(document: &Document) -> Result<HeadingAnalysis> {
    let texts: Vec<String> = document
        .select("h1")?
        .iter()
        .map(|el| el.text().trim().to_string())
        .collect();

    let status = match texts.len() {
        0 => HeadingStatus::Missing,
        1 => HeadingStatus::Good,
        _ => HeadingStatus::Warning,
    };

    Ok(HeadingAnalysis { count: texts.len(), texts, status })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<html><body><p>none</p></body></html>", 0, HeadingStatus::Missing)]
    #[case("<html><body><h1>One</h1></body></html>", 1, HeadingStatus::Good)]
    #[case("<html><body><h1>One</h1><h1>Two</h1></body></html>", 2, HeadingStatus::Warning)]
    #[case("<html><body><h1>a</h1><h1>b</h1><h1>c</h1></body></html>", 3, HeadingStatus::Warning)]
    fn test_status_follows_count(#[case] html: &str, #[case] count: usize, #[case] status: HeadingStatus) {
        let doc = Document::parse(html).unwrap();
        let analysis = analyze_headings(&doc).unwrap();
        assert_eq!(analysis.count, count);
        assert_eq!(analysis.status, status);
    }

    #[test]
    fn test_texts_trimmed_in_document_order() {
        let html = "<html><body><h1>  First Heading </h1><div><h1>Second</h1></div></body></html>";
        let doc = Document::parse(html).unwrap();
        let analysis = analyze_headings(&doc).unwrap();
        assert_eq!(analysis.texts, vec!["First Heading", "Second"]);
    }

    #[test]
    fn test_nested_markup_flattened() {
        let html = "<html><body><h1>Best <em>Shoes</em> Online</h1></body></html>";
        let doc = Document::parse(html).unwrap();
        let analysis = analyze_headings(&doc).unwrap();
        assert_eq!(analysis.texts, vec!["Best Shoes Online"]);
        assert_eq!(analysis.status, HeadingStatus::Good);
    }

    #[test]
    fn test_warning_display_text() {
        assert_eq!(
            HeadingStatus::Warning.to_string(),
            "Warning | It is generally recommended to only use one H1 Tag on a page."
        );
        assert_eq!(HeadingStatus::Good.to_string(), "Good");
        assert_eq!(HeadingStatus::Missing.to_string(), "Missing");
    }

    #[test]
    fn test_lower_heading_levels_ignored() {
        let html = "<html><body><h2>Not an H1</h2><h3>Nor this</h3></body></html>";
        let doc = Document::parse(html).unwrap();
        let analysis = analyze_headings(&doc).unwrap();
        assert_eq!(analysis.count, 0);
        assert_eq!(analysis.status, HeadingStatus::Missing);
    }
}
