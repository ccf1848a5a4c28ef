use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, LlmClient, LlmClientError, VectorIndex, VectorIndexError,
};
use crate::domain::ModelProvider;

pub const SYSTEM_MESSAGE: &str = "You are a helpful AI assistant generating structured responses.";

const OUTPUT_FORMAT_PREAMBLE: &str = r#"You are a file generation assistant. From the user's request and the provided context, produce a structured response in JSON that can be turned into a downloadable file.
Rules:
1. Return only valid JSON. No markdown, no explanations, no commentary.
2. Pick exactly one of the formats below to match the request.

Word / DOCX output (the user mentions a word file, doc, document, work instruction, ...):
{"type":"docx","title":"Document Title","content":[{"type":"paragraph","text":"..."},{"type":"list","items":["...","..."]}]}

Excel / sheet output (the user mentions excel, sheet, checklist, table, ...):
{"type":"excel","filename":"filename.xlsx","sheets":[{"name":"Sheet1","data":[{"Column1":"Value1","Column2":"Value2"}]}]}

PDF output (the user mentions pdf, report, summary pdf, ...):
{"type":"pdf","title":"PDF Title","sections":[{"heading":"Section 1","content":"..."}]}

Plain text, no file (an ordinary question):
{"type":"text","content":"Conversational answer."}

Now use the user message and the context to produce the response."#;

/// Retrieves context for a prompt and asks the selected model for structured JSON.
pub struct ResponseSynthesizer {
    embedder: Arc<dyn Embedder>,
    vector_index: Arc<dyn VectorIndex>,
    openai: Arc<dyn LlmClient>,
    gemini: Arc<dyn LlmClient>,
    top_k: usize,
}

impl ResponseSynthesizer {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        vector_index: Arc<dyn VectorIndex>,
        openai: Arc<dyn LlmClient>,
        gemini: Arc<dyn LlmClient>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            vector_index,
            openai,
            gemini,
            top_k,
        }
    }

    /// Texts of the closest index matches joined by blank lines; empty when nothing matches.
    pub async fn retrieve_context(&self, prompt: &str) -> Result<String, SynthesisError> {
        let query_embedding = self.embedder.embed(prompt).await?;

        let matches = self.vector_index.query(&query_embedding, self.top_k).await?;
        tracing::debug!(match_count = matches.len(), "Retrieved context");

        Ok(matches
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    pub async fn generate(
        &self,
        prompt: &str,
        context: &str,
        provider: ModelProvider,
    ) -> Result<String, SynthesisError> {
        let client = match provider {
            ModelProvider::OpenAi => &self.openai,
            ModelProvider::Gemini => &self.gemini,
        };

        let reply = client
            .complete(Some(SYSTEM_MESSAGE), &build_prompt(prompt, context))
            .await
            .map_err(SynthesisError::Completion)?;

        Ok(strip_code_fences(&reply))
    }
}

pub fn build_prompt(prompt: &str, context: &str) -> String {
    format!("{OUTPUT_FORMAT_PREAMBLE}\n\nUser message:\n{prompt}\n\nRelevant context:\n{context}\n")
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, then trims.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorIndexError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
