use async_trait::async_trait;

use super::{SearchResult, VectorIndexError};
use crate::domain::{Embedding, IndexedVector};

#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn record_count(&self) -> Result<u64, VectorIndexError>;

    async fn delete_all(&self) -> Result<(), VectorIndexError>;

    async fn upsert(&self, vectors: &[IndexedVector]) -> Result<(), VectorIndexError>;

    /// Closest `top_k` records to `embedding`, best match first.
    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorIndexError>;
}
