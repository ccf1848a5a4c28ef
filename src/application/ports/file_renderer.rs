use crate::domain::{DocxContent, PdfContent, SpreadsheetContent};

/// Encodes structured content into file bytes. Rendering is CPU-only; no I/O.
pub trait FileRenderer: Send + Sync {
    fn render_docx(&self, content: &DocxContent) -> Result<Vec<u8>, RenderError>;

    fn render_spreadsheet(&self, content: &SpreadsheetContent) -> Result<Vec<u8>, RenderError>;

    fn render_pdf(&self, content: &PdfContent) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("docx encoding failed: {0}")]
    Docx(String),
    #[error("spreadsheet encoding failed: {0}")]
    Spreadsheet(String),
    #[error("pdf encoding failed: {0}")]
    Pdf(String),
}
