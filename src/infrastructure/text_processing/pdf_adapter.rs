use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedFile;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

/// One page of extracted text, split into its text runs.
struct PdfPage {
    runs: Vec<String>,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<PdfPage>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = match doc.extract_text(page_index) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(page = page_index, error = %e, "PDF page extraction failed");
                    String::new()
                }
            };
            pages.push(PdfPage {
                runs: text
                    .lines()
                    .map(decode_run)
                    .filter(|run| !run.is_empty())
                    .collect(),
            });
        }

        Ok(pages)
    }
}

/// Some producers emit percent-encoded runs; anything that doesn't decode is kept raw.
/// Whitespace inside a run collapses to single spaces.
fn decode_run(run: &str) -> String {
    let decoded = urlencoding::decode(run)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| run.to_string());
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn join_runs(pages: Vec<PdfPage>) -> String {
    pages
        .into_iter()
        .flat_map(|page| page.runs)
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(key = %file.key, name = %file.name))]
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(join_runs(pages))
    }
}
