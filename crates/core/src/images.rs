use serde::Serialize;

use crate::Result;
use crate::parse::Document;

/// Image accessibility tallies.
///
/// `with_alt` and `missing_alt` always sum to `total`. An alt attribute that
/// is absent, empty, or whitespace-only counts as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageAnalysis {
    pub total: usize,
    pub with_alt: usize,
    pub missing_alt: usize,
}

/// Counts `<img>` tags and how many carry usable alt text.
pub fn analyze_images(document: &Document) -> Result<ImageAnalysis> {
    let images = document.select("img")?;
    let total = images.len();

    let missing_alt = images
        .iter()
        .filter(|el| el.attr("alt").unwrap_or("").trim().is_empty())
        .count();

    Ok(ImageAnalysis { total, with_alt: total - missing_alt, missing_alt })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_partition() {
        let html = r#"
            <html><body>
                <img src="a.png" alt="A shoe">
                <img src="b.png" alt="">
                <img src="c.png" alt="   ">
                <img src="d.png">
            </body></html>
        "#;

        let doc = Document::parse(html).unwrap();
        let analysis = analyze_images(&doc).unwrap();
        assert_eq!(analysis.total, 4);
        assert_eq!(analysis.with_alt, 1);
        assert_eq!(analysis.missing_alt, 3);
        assert_eq!(analysis.with_alt + analysis.missing_alt, analysis.total);
    }

    #[test]
    fn test_no_images() {
        let doc = Document::parse("<html><body><p>text only</p></body></html>").unwrap();
        let analysis = analyze_images(&doc).unwrap();
        assert_eq!(analysis, ImageAnalysis::default());
    }

    #[test]
    fn test_all_described() {
        let html = r#"<html><body><img src="a.png" alt="one"><img src="b.png" alt="two"></body></html>"#;
        let doc = Document::parse(html).unwrap();
        let analysis = analyze_images(&doc).unwrap();
        assert_eq!(analysis.total, 2);
        assert_eq!(analysis.with_alt, 2);
        assert_eq!(analysis.missing_alt, 0);
    }
}
