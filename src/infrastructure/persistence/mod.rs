mod in_memory_index;
mod pinecone_adapter;
mod vector_index_factory;

pub use in_memory_index::InMemoryVectorIndex;
pub use pinecone_adapter::{PINECONE_CONTROL_PLANE_URL, PineconeAdapter};
pub use vector_index_factory::VectorIndexFactory;
