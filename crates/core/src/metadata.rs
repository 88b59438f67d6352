use crate::parse::Document;

/// Sentinel returned when the document has no `<title>` element.
pub const NO_TITLE_FALLBACK: &str = "No title tag found";

/// Sentinel returned when the document has no usable meta description.
pub const NO_DESCRIPTION_FALLBACK: &str = "No meta description found";

/// Extracts the page title.
///
/// Returns the trimmed text of the first `<title>` element. A missing
/// element yields the sentinel; an element that is present but empty yields
/// the empty string.
pub fn extract_title(document: &Document) -> String {
    match document.title() {
        Some(text) => text.trim().to_string(),
        None => NO_TITLE_FALLBACK.to_string(),
    }
}

/// Extracts the meta description.
///
/// Reads the `content` attribute of the first `<meta name="description">`
/// element. A missing element or an empty attribute yields the sentinel; a
/// non-empty attribute is trimmed before being returned.
pub fn extract_meta_description(document: &Document) -> String {
    if let Ok(elements) = document.select(r#"meta[name="description"]"#)
        && let Some(el) = elements.first()
        && let Some(content) = el.attr("content")
        && !content.is_empty()
    {
        return content.trim().to_string();
    }

    NO_DESCRIPTION_FALLBACK.to_string()
}
