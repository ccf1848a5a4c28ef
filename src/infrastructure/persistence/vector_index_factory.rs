use std::sync::Arc;

use crate::application::ports::{VectorIndex, VectorIndexError};
use crate::presentation::config::{VectorIndexProvider, VectorIndexSettings};

use super::in_memory_index::InMemoryVectorIndex;
use super::pinecone_adapter::{PINECONE_CONTROL_PLANE_URL, PineconeAdapter};

pub struct VectorIndexFactory;

impl VectorIndexFactory {
    pub async fn create(
        settings: &VectorIndexSettings,
    ) -> Result<Arc<dyn VectorIndex>, VectorIndexError> {
        match settings.provider {
            VectorIndexProvider::Memory => {
                tracing::info!("Using in-memory vector index");
                Ok(Arc::new(InMemoryVectorIndex::new()))
            }
            VectorIndexProvider::Pinecone => {
                let api_key = settings.api_key.as_deref().ok_or_else(|| {
                    VectorIndexError::ConnectionFailed("vector_index.api_key required".into())
                })?;

                let adapter = match settings.index_host.as_deref() {
                    Some(host) => PineconeAdapter::new(api_key, host)?,
                    None => {
                        let index_name = settings.index_name.as_deref().ok_or_else(|| {
                            VectorIndexError::ConnectionFailed(
                                "vector_index.index_name or vector_index.index_host required"
                                    .into(),
                            )
                        })?;
                        PineconeAdapter::connect(api_key, index_name, PINECONE_CONTROL_PLANE_URL)
                            .await?
                    }
                };

                Ok(Arc::new(adapter))
            }
        }
    }
}
