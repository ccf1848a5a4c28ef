use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::TextChunk;

/// Cuts text into consecutive, non-overlapping windows of `chunk_size` characters.
/// Only the final chunk may be shorter.
#[derive(Debug)]
pub struct FixedSizeSplitter {
    chunk_size: usize,
}

impl FixedSizeSplitter {
    pub fn new(chunk_size: usize) -> Result<Self, TextSplitterError> {
        if chunk_size == 0 {
            return Err(TextSplitterError::InvalidChunkSize);
        }
        Ok(Self { chunk_size })
    }
}

#[async_trait]
impl TextSplitter for FixedSizeSplitter {
    async fn split(&self, text: &str) -> Result<Vec<TextChunk>, TextSplitterError> {
        let chars: Vec<char> = text.chars().collect();

        Ok(chars
            .chunks(self.chunk_size)
            .enumerate()
            .map(|(i, window)| TextChunk::new(window.iter().collect(), i * self.chunk_size))
            .collect())
    }
}
