//! PDF report rendering.
//!
//! The report is laid out top-down on A4 pages. A cursor tracks the
//! vertical position from the page top in millimeters and converts to the
//! PDF's bottom-origin coordinates at draw time. Long values are wrapped by
//! word accumulation against a fixed character budget; no word is ever
//! split.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::warn;

use crate::audit::AuditReport;
use crate::{AuditError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 20.0;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const HEADING_LEAD: f32 = 8.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LEAD: f32 = 6.0;
const FOOTER_SIZE: f32 = 8.0;

const LOGO_WIDTH: f32 = 65.0;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.5;
const PT_TO_MM: f32 = 0.352_778;

/// Settings for PDF rendering.
#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Logo drawn under the footer; skipped silently when the file is
    /// absent.
    pub logo_path: PathBuf,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { logo_path: PathBuf::from("logo.png") }
    }
}

/// Writes the audit report as a PDF file at `path`.
///
/// # Errors
///
/// Returns [`AuditError::WriteError`] when the file cannot be created and
/// [`AuditError::PdfError`] when document construction fails. A missing or
/// unreadable logo never fails the report.
pub fn write_pdf_report(report: &AuditReport, path: &Path, config: &PdfConfig) -> Result<()> {
    let (doc, page, layer) =
        PdfDocument::new("SEO Audit Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let fonts = Fonts {
        regular: add_font(&doc, BuiltinFont::Helvetica)?,
        bold: add_font(&doc, BuiltinFont::HelveticaBold)?,
        oblique: add_font(&doc, BuiltinFont::HelveticaOblique)?,
    };

    render_report(&doc, doc.get_page(page).get_layer(layer), &fonts, report, config);

    doc.save(&mut BufWriter::new(File::create(path)?))
        .map_err(|e| AuditError::PdfError(e.to_string()))?;

    Ok(())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font).map_err(|e| AuditError::PdfError(e.to_string()))
}

fn render_report(
    doc: &PdfDocumentReference,
    first_layer: PdfLayerReference,
    fonts: &Fonts,
    report: &AuditReport,
    config: &PdfConfig,
) {
    let mut page = PageWriter::new(doc, first_layer);

    page.space(10.0);
    page.centered("SEO AUDIT REPORT", TITLE_SIZE, 10.0, &fonts.bold);
    page.space(5.0);

    page.heading("WEBSITE INFORMATION", &fonts.bold);
    let bare_url = report.url.replace("https://", "").replace("http://", "");
    if bare_url.chars().count() > 50 {
        page.body("Website:", &fonts.regular);
        let (head, tail) = split_at_chars(&bare_url, 50);
        page.body(&format!("  {}", head), &fonts.regular);
        page.body(&format!("  {}", tail), &fonts.regular);
    } else {
        page.body(&format!("Website: {}", bare_url), &fonts.regular);
    }
    page.body(&format!("Keyword: {}", report.keyword), &fonts.regular);
    page.body(&format!("Date: {}", report.formatted_date()), &fonts.regular);
    page.space(8.0);

    page.heading(
        "TITLE TAG ANALYSIS | Optimal length (between 50 and 60 characters).",
        &fonts.bold,
    );
    render_wrapped_field(&mut page, fonts, "Title", &report.title, 70, 65);
    page.body(
        &format!("Length: {} characters", report.title.chars().count()),
        &fonts.regular,
    );
    page.space(6.0);

    page.heading("META DESCRIPTION ANALYSIS", &fonts.bold);
    render_wrapped_field(&mut page, fonts, "Description", &report.meta_description, 70, 65);
    page.body(
        &format!("Length: {} characters", report.meta_description.chars().count()),
        &fonts.regular,
    );
    page.space(6.0);

    page.heading("KEYWORD FREQUENCY", &fonts.bold);
    let kf = &report.keyword_frequency;
    page.body(&format!("Total Occurrences: {}", kf.total), &fonts.regular);
    page.body(&format!("In Title: {}", kf.title), &fonts.regular);
    page.body(&format!("In Headings: {}", kf.headings), &fonts.regular);
    page.body(&format!("In Body Text: {}", kf.body), &fonts.regular);
    page.space(6.0);

    page.heading("H1 TAGS ANALYSIS", &fonts.bold);
    page.body(&format!("H1 Count: {}", report.headings.count), &fonts.regular);
    page.body(&format!("Status: {}", report.headings.status), &fonts.regular);
    for (i, text) in report.headings.texts.iter().enumerate() {
        page.body(&format!("H1 #{}:", i + 1), &fonts.regular);
        if text.chars().count() > 60 {
            for line in wrap_words(text, 55) {
                page.body(&format!("  {}", line), &fonts.regular);
            }
        } else {
            page.body(&format!("  {}", text), &fonts.regular);
        }
    }
    page.space(6.0);

    page.heading("IMAGES ANALYSIS", &fonts.bold);
    page.body(&format!("Total Images: {}", report.images.total), &fonts.regular);
    page.body(&format!("With ALT Tags: {}", report.images.with_alt), &fonts.regular);
    page.body(&format!("Missing ALT Tags: {}", report.images.missing_alt), &fonts.regular);
    page.space(6.0);

    page.heading("SCHEMA MARKUP", &fonts.bold);
    let schema = &report.schema;
    page.body(
        &format!("Schema Present: {}", if schema.present { "Yes" } else { "No" }),
        &fonts.regular,
    );
    if schema.present {
        page.body(&format!("JSON-LD Scripts: {}", schema.json_ld_count), &fonts.regular);
        page.body(&format!("Microdata: {}", schema.microdata_count), &fonts.regular);
        if !schema.types.is_empty() {
            page.body("Schema Types:", &fonts.regular);
            for schema_type in schema.types.iter().take(5) {
                page.body(&format!("  - {}", schema_type), &fonts.regular);
            }
        }
    }
    page.space(6.0);

    page.heading("PAGESPEED PERFORMANCE", &fonts.bold);
    match &report.performance {
        Some(insight) => {
            page.body(&format!("Performance Score: {}/100", insight.score), &fonts.regular);
            page.body(
                &format!("First Contentful Paint: {}", insight.fcp_display),
                &fonts.regular,
            );
        }
        None => {
            page.body("PageSpeed data not available", &fonts.regular);
        }
    }

    page.space(15.0);
    page.centered("Generated by auditus", FOOTER_SIZE, BODY_LEAD, &fonts.oblique);
    page.centered(&report.formatted_date(), FOOTER_SIZE, BODY_LEAD, &fonts.oblique);

    if config.logo_path.exists()
        && let Err(e) = place_logo(&page.layer, &config.logo_path, page.y + 10.0)
    {
        warn!("Failed to draw the logo: {}", e);
    }
}

/// Writes a labeled value, wrapping it onto indented lines when it exceeds
/// `wrap_above` characters.
fn render_wrapped_field(
    page: &mut PageWriter,
    fonts: &Fonts,
    label: &str,
    value: &str,
    wrap_above: usize,
    budget: usize,
) {
    if value.chars().count() > wrap_above {
        page.body(&format!("{}:", label), &fonts.regular);
        for line in wrap_words(value, budget) {
            page.body(&format!("  {}", line), &fonts.regular);
        }
    } else {
        page.body(&format!("{}: {}", label, value), &fonts.regular);
    }
}

/// Top-down layout cursor over a growing PDF document.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Offset from the page top in millimeters.
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self { doc, layer, y: MARGIN_TOP }
    }

    /// Writes one left-aligned line and advances the cursor by `lead`.
    fn line(&mut self, text: &str, size: f32, lead: f32, font: &IndirectFontRef) {
        self.break_page_if_needed(lead);
        let baseline = self.y + lead * 0.75;
        self.layer.use_text(sanitize(text), size, Mm(MARGIN_LEFT), Mm(PAGE_HEIGHT - baseline), font);
        self.y += lead;
    }

    fn body(&mut self, text: &str, font: &IndirectFontRef) {
        self.line(text, BODY_SIZE, BODY_LEAD, font);
    }

    /// Section heading followed by the standard 2mm gap.
    fn heading(&mut self, text: &str, font: &IndirectFontRef) {
        self.line(text, HEADING_SIZE, HEADING_LEAD, font);
        self.space(2.0);
    }

    /// Writes one horizontally centered line.
    ///
    /// The width estimate uses an average glyph width; built-in fonts carry
    /// no metrics we could measure against.
    fn centered(&mut self, text: &str, size: f32, lead: f32, font: &IndirectFontRef) {
        self.break_page_if_needed(lead);
        let text = sanitize(text);
        let width = text.chars().count() as f32 * size * AVG_CHAR_WIDTH * PT_TO_MM;
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN_LEFT);
        let baseline = self.y + lead * 0.75;
        self.layer.use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - baseline), font);
        self.y += lead;
    }

    /// Vertical gap in millimeters.
    fn space(&mut self, mm: f32) {
        self.y += mm;
    }

    fn break_page_if_needed(&mut self, lead: f32) {
        if self.y + lead > PAGE_HEIGHT - MARGIN_BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = MARGIN_TOP;
        }
    }
}

/// Draws the logo 65mm wide, horizontally centered, with its top edge at
/// `y_top` millimeters from the page top.
fn place_logo(layer: &PdfLayerReference, path: &Path, y_top: f32) -> Result<()> {
    let mut file = File::open(path)?;
    let decoder = PngDecoder::new(&mut file).map_err(|e| AuditError::PdfError(e.to_string()))?;
    let image = Image::try_from(decoder).map_err(|e| AuditError::PdfError(e.to_string()))?;

    // Natural print size at the default 300 dpi.
    let natural_w = image.image.width.0 as f32 * 25.4 / 300.0;
    let natural_h = image.image.height.0 as f32 * 25.4 / 300.0;
    if natural_w <= 0.0 {
        return Ok(());
    }

    let scale = LOGO_WIDTH / natural_w;
    let x = (PAGE_WIDTH - LOGO_WIDTH) / 2.0;
    let y = PAGE_HEIGHT - y_top - natural_h * scale;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            ..Default::default()
        },
    );

    Ok(())
}

/// Accumulates whitespace-delimited words into lines, flushing whenever the
/// running length plus the next word would reach `budget`. Words are never
/// split, so a single word over the budget produces an over-long line.
fn wrap_words(text: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.chars().count() + word.chars().count() < budget {
            line.push_str(word);
            line.push(' ');
        } else {
            lines.push(line.trim().to_string());
            line = format!("{} ", word);
        }
    }

    if !line.trim().is_empty() {
        lines.push(line.trim().to_string());
    }

    lines
}

/// Replaces characters the built-in Helvetica fonts cannot encode.
fn sanitize(text: &str) -> String {
    text.chars().map(|c| if (c as u32) > 0xFF { '?' } else { c }).collect()
}

/// Splits `text` after `index` characters, independent of byte offsets.
fn split_at_chars(text: &str, index: usize) -> (String, String) {
    let head: String = text.chars().take(index).collect();
    let tail: String = text.chars().skip(index).collect();
    (head, tail)
}
