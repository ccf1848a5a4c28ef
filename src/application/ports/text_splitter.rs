use async_trait::async_trait;

use crate::domain::TextChunk;

#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split(&self, text: &str) -> Result<Vec<TextChunk>, TextSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
    #[error("splitting failed: {0}")]
    SplittingFailed(String),
}
