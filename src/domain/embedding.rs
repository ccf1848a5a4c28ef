use super::chunk::{ChunkId, TextChunk};

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let dot_product: f32 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();

        let magnitude_a: f32 = self.values.iter().map(|x| x * x).sum::<f32>().sqrt();
        let magnitude_b: f32 = other.values.iter().map(|x| x * x).sum::<f32>().sqrt();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return 0.0;
        }

        dot_product / (magnitude_a * magnitude_b)
    }
}

/// One index record: the chunk's vector plus its text as metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedVector {
    pub id: ChunkId,
    pub embedding: Embedding,
    pub text: String,
}

impl IndexedVector {
    pub fn from_chunk(chunk: TextChunk, embedding: Embedding) -> Self {
        Self {
            id: chunk.id,
            embedding,
            text: chunk.text,
        }
    }
}
