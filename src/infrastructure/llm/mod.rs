mod gemini_client;
mod openai_client;
mod openai_embedder;

pub use gemini_client::{GEMINI_BASE_URL, GeminiClient};
pub use openai_client::{OPENAI_BASE_URL, OpenAiClient};
pub use openai_embedder::OpenAiEmbedder;
