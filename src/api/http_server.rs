// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::classify::classify_handler;
use super::errors::ApiError;
use super::gallery::gallery_handler;
use crate::classifier::ClassifierManager;
use crate::config::NodeConfig;
use crate::presenter::GLOBAL_DISCLAIMER;
use crate::version;

/// Embedded demo page
const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ClassifierManager>,
}

/// Response from the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// Classifier lifecycle: not_loaded, ready, or unavailable
    pub classifier: String,
    pub model: String,
    pub version: String,
}

pub async fn start_server(config: NodeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        classifier: Arc::new(ClassifierManager::new(config.model_config())),
    };

    if config.preload_model {
        // Warm construction at startup instead of on the first upload; a
        // failure is cached the same way either path.
        let _ = state.classifier.get().await;
    }

    let app = build_router(state, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.api_port).parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Demo server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Demo page
        .route("/", get(page_handler))
        // Health check
        .route("/health", get(health_handler))
        // Classification endpoint
        .route("/v1/classify", post(classify_handler))
        // Example gallery metadata
        .route("/v1/examples", get(gallery_handler))
        // Gallery images
        .nest_service("/static", ServeDir::new(static_dir))
        // Let oversized uploads reach the boundary check instead of being
        // cut off at axum's 2MB default
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn page_handler() -> Html<String> {
    Html(INDEX_HTML.replace("{{GLOBAL_DISCLAIMER}}", GLOBAL_DISCLAIMER))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::response::Json(HealthResponse {
        status: "ok".to_string(),
        classifier: state.classifier.availability().as_str().to_string(),
        model: state.classifier.model_name().to_string(),
        version: version::VERSION_NUMBER.to_string(),
    })
}

/// Error response wrapper
pub struct ApiErrorResponse {
    error: ApiError,
    request_id: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: ApiError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }

    pub fn with_request_id(error: ApiError, request_id: String) -> Self {
        Self {
            error,
            request_id: Some(request_id),
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self::new(error)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.error.to_response(self.request_id);

        (status, axum::response::Json(error_response)).into_response()
    }
}
