use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error::{error_response, parse_body};
use crate::application::services::UploadError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    /// Accepted for client compatibility; the signed URL does not pin a content type.
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlResponse {
    pub upload_url: String,
    pub key: String,
}

#[tracing::instrument(skip(state, body))]
pub async fn presigned_url_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: PresignedUrlRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    tracing::debug!(
        file_name = ?request.file_name,
        content_type = ?request.content_type,
        "Presigning upload"
    );

    let file_name = request.file_name.unwrap_or_default();
    match state.upload_service.presign(&file_name).await {
        Ok(presigned) => {
            tracing::info!(key = %presigned.key, "Upload URL issued");
            (
                StatusCode::OK,
                Json(PresignedUrlResponse {
                    upload_url: presigned.upload_url,
                    key: presigned.key.to_string(),
                }),
            )
                .into_response()
        }
        Err(e @ UploadError::MissingFileName) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to presign upload");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
