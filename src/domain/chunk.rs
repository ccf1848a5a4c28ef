use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub id: ChunkId,
    pub text: String,
    pub offset: usize,
}

/// Vector-index record id, rendered as `chunk-<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkId(String);

impl ChunkId {
    pub fn new() -> Self {
        Self(format!("chunk-{}", Uuid::new_v4()))
    }

    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TextChunk {
    pub fn new(text: String, offset: usize) -> Self {
        Self {
            id: ChunkId::new(),
            text,
            offset,
        }
    }
}
