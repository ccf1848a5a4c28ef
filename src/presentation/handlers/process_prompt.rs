use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{error_response, parse_body};
use crate::application::services::{PromptError, PromptOutcome, PromptRequest};
use crate::domain::{ModelProvider, UploadedFile};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<UploadedFile>>,
    #[serde(default)]
    pub model_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPromptResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl From<PromptOutcome> for ProcessPromptResponse {
    fn from(outcome: PromptOutcome) -> Self {
        let message = outcome.message().to_string();
        match outcome {
            PromptOutcome::File { file, .. } => Self {
                message,
                download_url: Some(file.download_url),
                result: None,
            },
            PromptOutcome::Text { result } => Self {
                message,
                download_url: None,
                result: Some(result),
            },
        }
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn process_prompt_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: ProcessPromptRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let request = PromptRequest {
        prompt: request.prompt.unwrap_or_default(),
        files: request.files.unwrap_or_default(),
        provider: ModelProvider::from_model_type(request.model_type.as_deref()),
    };

    tracing::debug!(
        prompt = %sanitize_prompt(&request.prompt),
        provider = %request.provider,
        file_count = request.files.len(),
        "Processing prompt"
    );

    match state.prompt_service.process(&request).await {
        Ok(outcome) => {
            tracing::info!(message = outcome.message(), "Prompt processed");
            (StatusCode::OK, Json(ProcessPromptResponse::from(outcome))).into_response()
        }
        Err(e @ PromptError::MissingPrompt) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Prompt processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
