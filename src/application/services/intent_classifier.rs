use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::OutputIntent;

pub struct IntentClassifier {
    llm_client: Arc<dyn LlmClient>,
}

impl IntentClassifier {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Replies outside `pdf | excel | doc | text` resolve to [`OutputIntent::DEFAULT`].
    pub async fn classify(&self, prompt: &str) -> Result<OutputIntent, LlmClientError> {
        let reply = self
            .llm_client
            .complete(None, &classification_prompt(prompt))
            .await?;

        let intent = OutputIntent::from_reply(&reply);
        tracing::debug!(reply = %reply.trim(), intent = %intent, "Classified output intent");

        Ok(intent)
    }
}

pub fn classification_prompt(prompt: &str) -> String {
    format!(
        "Decide whether the user message below asks for a downloadable file or an ordinary \
         text answer.\n\
         If it asks for a file, reply with exactly one word from [\"pdf\", \"excel\", \"doc\"].\n\
         Otherwise reply with exactly \"text\".\n\
         Reply in lowercase with no explanation.\n\
         User message: \"{prompt}\""
    )
}
