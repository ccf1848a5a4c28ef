use axum::Json;
use axum::Router;
use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, presigned_url_handler, process_prompt_handler,
};
use crate::presentation::state::AppState;

/// Operations reachable through the catch-all dispatcher.
///
/// Matching is by substring so the service keeps working behind gateways that
/// prepend a stage or base path (`/prod/get-presigned-url`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PresignedUrl,
    ProcessPrompt,
    NotFound,
}

impl Route {
    pub fn resolve(method: &Method, path: &str) -> Self {
        if method != Method::POST {
            return Self::NotFound;
        }

        if path.contains("get-presigned-url") {
            Self::PresignedUrl
        } else if path.contains("process-prompt") {
            Self::ProcessPrompt
        } else {
            Self::NotFound
        }
    }
}

#[derive(Serialize)]
struct NotFoundResponse {
    message: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .fallback(dispatch)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let route = Route::resolve(request.method(), request.uri().path());
    tracing::debug!(?route, "Dispatching request");

    match route {
        Route::PresignedUrl => presigned_url_handler.call(request, state).await,
        Route::ProcessPrompt => process_prompt_handler.call(request, state).await,
        Route::NotFound => (
            StatusCode::NOT_FOUND,
            Json(NotFoundResponse {
                message: "Route not found",
            }),
        )
            .into_response(),
    }
}
