use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedFile;

/// Raw text of a Word package, one paragraph per line.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        let docx = docx_rs::read_docx(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read Word document: {e}"))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph),
                _ => None,
            })
            .map(|paragraph| {
                paragraph
                    .children
                    .iter()
                    .filter_map(|child| match child {
                        ParagraphChild::Run(run) => Some(run),
                        _ => None,
                    })
                    .flat_map(|run| run.children.iter())
                    .filter_map(|child| match child {
                        RunChild::Text(text) => Some(text.text.as_str()),
                        RunChild::Tab(_) => Some("\t"),
                        _ => None,
                    })
                    .collect::<String>()
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(key = %file.key, name = %file.name))]
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        let text = Self::extract(data)?;
        tracing::info!(chars = text.chars().count(), "Word text extraction complete");
        Ok(text)
    }
}
