use std::sync::Arc;

use serde_json::Value;

use super::file_materializer::{FileMaterializer, MaterializeError, MaterializedFile};
use super::index_synchronizer::{IndexSyncError, IndexSynchronizer};
use super::intent_classifier::IntentClassifier;
use super::response_synthesizer::{ResponseSynthesizer, SynthesisError};
use crate::application::ports::LlmClientError;
use crate::domain::{ModelProvider, OutputIntent, StructuredOutput, UploadedFile};

#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub prompt: String,
    pub files: Vec<UploadedFile>,
    pub provider: ModelProvider,
}

#[derive(Debug, Clone)]
pub enum PromptOutcome {
    File {
        intent: OutputIntent,
        file: MaterializedFile,
    },
    Text {
        result: Value,
    },
}

impl PromptOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::File { intent, .. } => match intent {
                OutputIntent::Doc => "DOC generated",
                OutputIntent::Excel => "Excel generated",
                OutputIntent::Pdf => "PDF generated",
                OutputIntent::Text => "Text answer",
            },
            Self::Text { .. } => "Text answer",
        }
    }
}

/// The process-prompt pipeline: index new uploads, retrieve, classify, generate, deliver.
pub struct PromptService {
    index_synchronizer: Arc<IndexSynchronizer>,
    intent_classifier: Arc<IntentClassifier>,
    response_synthesizer: Arc<ResponseSynthesizer>,
    file_materializer: Arc<FileMaterializer>,
}

impl PromptService {
    pub fn new(
        index_synchronizer: Arc<IndexSynchronizer>,
        intent_classifier: Arc<IntentClassifier>,
        response_synthesizer: Arc<ResponseSynthesizer>,
        file_materializer: Arc<FileMaterializer>,
    ) -> Self {
        Self {
            index_synchronizer,
            intent_classifier,
            response_synthesizer,
            file_materializer,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(provider = %request.provider, file_count = request.files.len())
    )]
    pub async fn process(&self, request: &PromptRequest) -> Result<PromptOutcome, PromptError> {
        if request.prompt.trim().is_empty() {
            return Err(PromptError::MissingPrompt);
        }

        if !request.files.is_empty() {
            let summary = self.index_synchronizer.synchronize(&request.files).await?;
            tracing::info!(
                deleted_uploads = summary.deleted_uploads,
                index_reset = summary.index_reset,
                chunks_indexed = summary.chunks_indexed,
                "Upload set indexed"
            );
        }

        let context = self
            .response_synthesizer
            .retrieve_context(&request.prompt)
            .await?;

        let intent = self
            .intent_classifier
            .classify(&request.prompt)
            .await
            .map_err(PromptError::Classification)?;

        let reply = self
            .response_synthesizer
            .generate(&request.prompt, &context, request.provider)
            .await?;

        match StructuredOutput::parse(intent, &reply) {
            StructuredOutput::Text(result) => Ok(PromptOutcome::Text { result }),
            StructuredOutput::Unparseable {
                intent: OutputIntent::Text,
                raw,
            } => {
                tracing::warn!("Text reply is not valid JSON, returning it verbatim");
                Ok(PromptOutcome::Text {
                    result: Value::String(raw),
                })
            }
            renderable => {
                let file = self.file_materializer.materialize(renderable).await?;
                Ok(PromptOutcome::File { intent, file })
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Missing prompt")]
    MissingPrompt,
    #[error("indexing: {0}")]
    Indexing(#[from] IndexSyncError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("classification: {0}")]
    Classification(LlmClientError),
    #[error("materialization: {0}")]
    Materialization(#[from] MaterializeError),
}
