use std::collections::HashSet;
use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::ports::{
    Embedder, EmbedderError, FileLoader, ObjectStorage, StorageError, TextSplitter,
    TextSplitterError, VectorIndex, VectorIndexError,
};
use crate::domain::{IndexedVector, StorageKey, TextChunk, UPLOADS_PREFIX, UploadedFile};

/// Replaces the indexed corpus with the contents of the current upload set.
///
/// Every call supersedes the previous upload batch in full: stale objects under
/// `uploads/` are deleted, the vector index is emptied, and the current files
/// are extracted, chunked, embedded and upserted. Clearing the index is
/// best-effort; every other step is fatal for the request.
pub struct IndexSynchronizer {
    storage: Arc<dyn ObjectStorage>,
    file_loader: Arc<dyn FileLoader>,
    text_splitter: Arc<dyn TextSplitter>,
    embedder: Arc<dyn Embedder>,
    vector_index: Arc<dyn VectorIndex>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub deleted_uploads: usize,
    pub index_reset: bool,
    pub chunks_indexed: usize,
}

impl IndexSynchronizer {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        file_loader: Arc<dyn FileLoader>,
        text_splitter: Arc<dyn TextSplitter>,
        embedder: Arc<dyn Embedder>,
        vector_index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            storage,
            file_loader,
            text_splitter,
            embedder,
            vector_index,
        }
    }

    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn synchronize(&self, files: &[UploadedFile]) -> Result<IndexSummary, IndexSyncError> {
        let deleted_uploads = self.remove_stale_uploads(files).await?;
        let index_reset = self.reset_index().await;

        let text = self.extract_all(files).await?;
        let chunks = self.text_splitter.split(&text).await?;
        tracing::debug!(
            chars = text.chars().count(),
            chunk_count = chunks.len(),
            "Extracted text chunked"
        );

        let chunks_indexed = self.embed_and_upsert(chunks).await?;

        Ok(IndexSummary {
            deleted_uploads,
            index_reset,
            chunks_indexed,
        })
    }

    async fn remove_stale_uploads(&self, files: &[UploadedFile]) -> Result<usize, IndexSyncError> {
        let current: HashSet<&StorageKey> = files.iter().map(|f| &f.key).collect();
        let existing = self.storage.list(UPLOADS_PREFIX).await?;

        let mut deleted = 0;
        for key in existing.iter().filter(|key| !current.contains(key)) {
            self.storage.delete(key).await?;
            tracing::debug!(key = %key, "Deleted stale upload");
            deleted += 1;
        }

        Ok(deleted)
    }

    async fn reset_index(&self) -> bool {
        let purge = async {
            let count = self.vector_index.record_count().await?;
            if count > 0 {
                self.vector_index.delete_all().await?;
            }
            Ok::<u64, VectorIndexError>(count)
        };

        match purge.await {
            Ok(purged) => {
                tracing::debug!(purged, "Vector index cleared");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Vector index cleanup skipped");
                false
            }
        }
    }

    async fn extract_all(&self, files: &[UploadedFile]) -> Result<String, IndexSyncError> {
        let mut all_text = String::new();

        for file in files {
            let data = self.storage.fetch(&file.key).await?;
            match self.file_loader.extract_text(&data, file).await {
                Ok(text) => all_text.push_str(&text),
                Err(e) => {
                    tracing::warn!(
                        key = %file.key,
                        name = %file.name,
                        error = %e,
                        "Text extraction failed, skipping file"
                    );
                }
            }
        }

        Ok(all_text)
    }

    async fn embed_and_upsert(&self, chunks: Vec<TextChunk>) -> Result<usize, IndexSyncError> {
        if chunks.is_empty() {
            return Ok(0);
        }

        let embeddings =
            try_join_all(chunks.iter().map(|chunk| self.embedder.embed(&chunk.text))).await?;

        let vectors: Vec<IndexedVector> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedVector::from_chunk(chunk, embedding))
            .collect();

        self.vector_index.upsert(&vectors).await?;

        Ok(vectors.len())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexSyncError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("index: {0}")]
    Index(#[from] VectorIndexError),
}
