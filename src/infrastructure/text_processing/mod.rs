mod composite_file_loader;
mod docx_adapter;
mod fixed_size_splitter;
mod pdf_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use fixed_size_splitter::FixedSizeSplitter;
pub use pdf_adapter::PdfAdapter;
