mod embedder;
mod file_loader;
mod file_renderer;
mod llm_client;
mod object_storage;
mod search_result;
mod text_splitter;
mod vector_index;
mod vector_index_error;

pub use embedder::{Embedder, EmbedderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_renderer::{FileRenderer, RenderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use object_storage::{ObjectStorage, StorageError};
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_index::VectorIndex;
pub use vector_index_error::VectorIndexError;
