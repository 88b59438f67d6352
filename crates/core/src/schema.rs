use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::parse::Document;

/// Structured-data markup found on a page.
///
/// `json_ld_count` counts every JSON-LD script tag, parseable or not;
/// `types` only carries names recovered from tags that parsed cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaAnalysis {
    pub present: bool,
    pub json_ld_count: usize,
    pub microdata_count: usize,
    pub rdfa_count: usize,
    /// Deduplicated `@type` names in first-seen order.
    pub types: Vec<String>,
}

/// Detects JSON-LD, microdata, and RDFa markup.
pub fn analyze_schema(document: &Document) -> Result<SchemaAnalysis> {
    let json_ld = document.select(r#"script[type="application/ld+json"]"#)?;
    let microdata_count = document.select("[itemscope]")?.len();
    let rdfa_count = document.select("[typeof]")?.len();

    let mut types = Vec::new();
    for script in &json_ld {
        let Ok(data) = serde_json::from_str::<Value>(&script.text()) else {
            continue;
        };
        collect_types(&data, &mut types);
    }

    let json_ld_count = json_ld.len();
    let present = json_ld_count > 0 || microdata_count > 0 || rdfa_count > 0;

    Ok(SchemaAnalysis { present, json_ld_count, microdata_count, rdfa_count, types })
}

/// Pull `@type` names out of a JSON-LD root value.
///
/// A top-level array is scanned one object at a time; deeper nesting is not
/// followed. `@type` may be a single name or an array of names.
fn collect_types(data: &Value, types: &mut Vec<String>) {
    match data {
        Value::Object(map) => {
            if let Some(type_value) = map.get("@type") {
                push_type_names(type_value, types);
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Value::Object(map) = item
                    && let Some(type_value) = map.get("@type")
                {
                    push_type_names(type_value, types);
                }
            }
        }
        _ => {}
    }
}

fn push_type_names(value: &Value, types: &mut Vec<String>) {
    match value {
        Value::String(name) => {
            if !types.iter().any(|t| t == name) {
                types.push(name.clone());
            }
        }
        Value::Array(names) => {
            for name in names.iter().filter_map(Value::as_str) {
                if !types.iter().any(|t| t == name) {
                    types.push(name.to_string());
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> SchemaAnalysis {
        let doc = Document::parse(html).unwrap();
        analyze_schema(&doc).unwrap()
    }

    #[test]
    fn test_no_markup() {
        let analysis = analyze("<html><body><p>plain page</p></body></html>");
        assert!(!analysis.present);
        assert_eq!(analysis, SchemaAnalysis::default());
    }

    #[test]
    fn test_json_ld_object() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{"@context": "https://schema.org", "@type": "Organization"}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert!(analysis.present);
        assert_eq!(analysis.json_ld_count, 1);
        assert_eq!(analysis.types, vec!["Organization"]);
    }

    #[test]
    fn test_json_ld_top_level_array() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">[{"@type": "Product"}, {"@type": "Review"}, {"name": "untyped"}]</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert_eq!(analysis.json_ld_count, 1);
        assert_eq!(analysis.types, vec!["Product", "Review"]);
    }

    #[test]
    fn test_type_array_flattened() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{"@type": ["Organization", "Brand"]}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert_eq!(analysis.types, vec!["Organization", "Brand"]);
    }

    #[test]
    fn test_malformed_json_counted_without_types() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{not valid json</script>
                <script type="application/ld+json"></script>
                <script type="application/ld+json">{"@type": "Article"}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert_eq!(analysis.json_ld_count, 3);
        assert_eq!(analysis.types, vec!["Article"]);
    }

    #[test]
    fn test_duplicate_types_keep_first_position() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{"@type": "Organization"}</script>
                <script type="application/ld+json">{"@type": "Product"}</script>
                <script type="application/ld+json">{"@type": "Organization"}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert_eq!(analysis.types, vec!["Organization", "Product"]);
    }

    #[test]
    fn test_graph_wrapper_yields_no_types() {
        let html = r#"
            <html><head>
                <script type="application/ld+json">{"@graph": [{"@type": "WebSite"}]}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert_eq!(analysis.json_ld_count, 1);
        assert!(analysis.types.is_empty());
    }

    #[test]
    fn test_microdata_and_rdfa_counted() {
        let html = r#"
            <html><body>
                <div itemscope itemtype="https://schema.org/Person"><span>x</span></div>
                <div itemscope></div>
                <p typeof="schema:Article">y</p>
            </body></html>
        "#;

        let analysis = analyze(html);
        assert!(analysis.present);
        assert_eq!(analysis.json_ld_count, 0);
        assert_eq!(analysis.microdata_count, 2);
        assert_eq!(analysis.rdfa_count, 1);
        assert!(analysis.types.is_empty());
    }

    #[test]
    fn test_other_script_types_ignored() {
        let html = r#"
            <html><head>
                <script type="text/javascript">{"@type": "Fake"}</script>
            </head></html>
        "#;

        let analysis = analyze(html);
        assert!(!analysis.present);
        assert_eq!(analysis.json_ld_count, 0);
    }
}
