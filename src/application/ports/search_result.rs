use crate::domain::ChunkId;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub id: ChunkId,
    pub text: String,
    pub score: f32,
}
