use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::{DocxAdapter, PdfAdapter};

/// Routes each file to the loader registered for its [`DocumentKind`].
/// Files with no registered loader contribute no text.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentKind, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentKind, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (DocumentKind::Pdf, Arc::new(PdfAdapter::new())),
            (DocumentKind::Word, Arc::new(DocxAdapter::new())),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        file: &UploadedFile,
    ) -> Result<String, FileLoaderError> {
        match self.adapters.get(&file.kind()) {
            Some(adapter) => adapter.extract_text(data, file).await,
            None => {
                tracing::debug!(name = %file.name, "No loader for file type, skipping");
                Ok(String::new())
            }
        }
    }
}
