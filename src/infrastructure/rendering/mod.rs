mod docx_renderer;
mod office_renderer;
mod pdf_renderer;
mod spreadsheet_renderer;

pub use docx_renderer::DocxRenderer;
pub use office_renderer::OfficeRenderer;
pub use pdf_renderer::PdfRenderer;
pub use spreadsheet_renderer::SpreadsheetRenderer;
