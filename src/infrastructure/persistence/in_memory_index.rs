use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SearchResult, VectorIndex, VectorIndexError};
use crate::domain::{Embedding, IndexedVector};

/// Process-local index ranked by cosine similarity. Used for local runs and tests.
#[derive(Default)]
pub struct InMemoryVectorIndex {
    records: RwLock<Vec<IndexedVector>>,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn record_count(&self) -> Result<u64, VectorIndexError> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn delete_all(&self) -> Result<(), VectorIndexError> {
        self.records.write().await.clear();
        Ok(())
    }

    async fn upsert(&self, vectors: &[IndexedVector]) -> Result<(), VectorIndexError> {
        let mut records = self.records.write().await;
        for vector in vectors {
            match records.iter_mut().find(|r| r.id == vector.id) {
                Some(existing) => *existing = vector.clone(),
                None => records.push(vector.clone()),
            }
        }
        Ok(())
    }

    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorIndexError> {
        let records = self.records.read().await;

        let mut scored: Vec<SearchResult> = records
            .iter()
            .map(|r| SearchResult {
                id: r.id.clone(),
                text: r.text.clone(),
                score: r.embedding.cosine_similarity(embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        Ok(scored)
    }
}
