pub mod text;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use text::render_text;

#[cfg(feature = "pdf")]
pub use pdf::{PdfConfig, write_pdf_report};
