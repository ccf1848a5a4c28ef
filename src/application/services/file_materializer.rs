use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{FileRenderer, ObjectStorage, RenderError, StorageError};
use crate::domain::{FileFormat, StorageKey, StructuredOutput};

/// Renders structured output into a file under `results/` and signs a download link.
pub struct FileMaterializer {
    storage: Arc<dyn ObjectStorage>,
    renderer: Arc<dyn FileRenderer>,
    link_ttl: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    pub key: StorageKey,
    pub download_url: String,
    pub format: FileFormat,
}

impl FileMaterializer {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        renderer: Arc<dyn FileRenderer>,
        link_ttl: Duration,
    ) -> Self {
        Self {
            storage,
            renderer,
            link_ttl,
        }
    }

    /// Unparseable output is replaced by the default document for its intent
    /// before rendering. Text output is rejected.
    pub async fn materialize(
        &self,
        output: StructuredOutput,
    ) -> Result<MaterializedFile, MaterializeError> {
        if output.is_unparseable() {
            tracing::warn!("Model reply is not valid JSON, rendering fallback document");
        }

        let now = Utc::now().timestamp_millis();
        let (format, file_name, bytes) = match output.or_fallback() {
            StructuredOutput::Docx(content) => (
                FileFormat::Docx,
                content.file_name(now),
                self.renderer.render_docx(&content)?,
            ),
            StructuredOutput::Spreadsheet(content) => (
                FileFormat::Xlsx,
                content.file_name(now),
                self.renderer.render_spreadsheet(&content)?,
            ),
            StructuredOutput::Pdf(content) => (
                FileFormat::Pdf,
                content.file_name(now),
                self.renderer.render_pdf(&content)?,
            ),
            StructuredOutput::Text(_) | StructuredOutput::Unparseable { .. } => {
                return Err(MaterializeError::NotAFile);
            }
        };

        let key = StorageKey::for_result(&file_name);
        let size = bytes.len();

        self.storage.put(&key, bytes, format.content_type()).await?;
        let download_url = self.storage.presign_download(&key, self.link_ttl).await?;

        tracing::info!(key = %key, bytes = size, format = format.extension(), "File materialized");

        Ok(MaterializedFile {
            key,
            download_url,
            format,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("output does not describe a file")]
    NotAFile,
    #[error("render: {0}")]
    Render(#[from] RenderError),
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}
