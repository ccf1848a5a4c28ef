mod chunk;
mod embedding;
mod file_format;
mod intent;
mod model_provider;
mod storage_key;
mod structured_output;
mod uploaded_file;

pub use chunk::{ChunkId, TextChunk};
pub use embedding::{Embedding, IndexedVector};
pub use file_format::FileFormat;
pub use intent::OutputIntent;
pub use model_provider::ModelProvider;
pub use storage_key::{RESULTS_PREFIX, StorageKey, UPLOADS_PREFIX};
pub use structured_output::{
    DocxBlock, DocxBody, DocxContent, PdfContent, PdfSection, SheetContent, SpreadsheetContent,
    StructuredOutput,
};
pub use uploaded_file::{DocumentKind, UploadedFile};
