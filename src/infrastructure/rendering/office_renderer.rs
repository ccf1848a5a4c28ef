use crate::application::ports::{FileRenderer, RenderError};
use crate::domain::{DocxContent, PdfContent, SpreadsheetContent};

use super::{DocxRenderer, PdfRenderer, SpreadsheetRenderer};

/// [`FileRenderer`] backed by the docx, xlsx and pdf encoders.
#[derive(Default)]
pub struct OfficeRenderer {
    docx: DocxRenderer,
    spreadsheet: SpreadsheetRenderer,
    pdf: PdfRenderer,
}

impl OfficeRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileRenderer for OfficeRenderer {
    fn render_docx(&self, content: &DocxContent) -> Result<Vec<u8>, RenderError> {
        self.docx.render(content)
    }

    fn render_spreadsheet(&self, content: &SpreadsheetContent) -> Result<Vec<u8>, RenderError> {
        self.spreadsheet.render(content)
    }

    fn render_pdf(&self, content: &PdfContent) -> Result<Vec<u8>, RenderError> {
        self.pdf.render(content)
    }
}
