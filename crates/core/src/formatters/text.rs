use crate::audit::AuditReport;

const RULE_WIDTH: usize = 60;

/// Renders the fixed-order console report.
///
/// Every report field appears, in a stable order, so two renders of the
/// same report are byte-identical. Schema types are listed uncapped here;
/// only the PDF presenter caps them.
pub fn render_text(report: &AuditReport) -> String {
    let mut output = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    output.push_str(&format!("\n{}\n", heavy));
    output.push_str("SEO AUDIT RESULTS\n");
    output.push_str(&format!("{}\n", heavy));

    output.push_str(&format!("URL: {}\n", report.url));
    output.push_str(&format!("Keyword: {}\n", report.keyword));
    output.push_str(&format!("Date: {}\n", report.formatted_date()));
    output.push_str(&format!("{}\n", light));

    output.push_str(&format!("Title Tag: {}\n", report.title));
    output.push_str(&format!("   Length: {} characters\n", report.title.chars().count()));

    output.push_str(&format!("Meta Description: {}\n", report.meta_description));
    output.push_str(&format!(
        "   Length: {} characters\n",
        report.meta_description.chars().count()
    ));

    let kf = &report.keyword_frequency;
    output.push_str("Keyword Frequency:\n");
    output.push_str(&format!("   Total occurrences: {}\n", kf.total));
    output.push_str(&format!("   In title: {}\n", kf.title));
    output.push_str(&format!("   In headings: {}\n", kf.headings));
    output.push_str(&format!("   In body: {}\n", kf.body));

    output.push_str("H1 Tags Analysis:\n");
    output.push_str(&format!("   Count: {} ({})\n", report.headings.count, report.headings.status));
    for (i, text) in report.headings.texts.iter().enumerate() {
        output.push_str(&format!("   H1 {}: {}\n", i + 1, truncate_chars(text, 60)));
    }

    output.push_str("Images Analysis:\n");
    output.push_str(&format!("   Total images: {}\n", report.images.total));
    output.push_str(&format!("   With ALT tags: {}\n", report.images.with_alt));
    output.push_str(&format!("   Missing ALT tags: {}\n", report.images.missing_alt));

    let schema = &report.schema;
    output.push_str("Schema Markup:\n");
    output.push_str(&format!("   Present: {}\n", if schema.present { "Yes" } else { "No" }));
    output.push_str(&format!("   JSON-LD: {}\n", schema.json_ld_count));
    output.push_str(&format!("   Microdata: {}\n", schema.microdata_count));
    output.push_str(&format!("   RDFa: {}\n", schema.rdfa_count));
    if !schema.types.is_empty() {
        output.push_str(&format!("   Schema Types: {}\n", schema.types.join(", ")));
    }

    match &report.performance {
        Some(insight) => {
            output.push_str("PageSpeed Performance:\n");
            output.push_str(&format!("   Performance Score: {}/100\n", insight.score));
            output.push_str(&format!("   First Contentful Paint: {}\n", insight.fcp_display));
        }
        None => {
            output.push_str("PageSpeed Performance: Performance data not available\n");
        }
    }

    output
}

/// Cuts `text` to `limit` characters, appending `...` when something was
/// dropped. Counts characters, not bytes.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut cut: String = text.chars().take(limit).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}
