use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single-turn completion. `system` is an optional instruction sent ahead of `prompt`.
    async fn complete(&self, system: Option<&str>, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
