//! HTTP API for the Herald publish pipeline.

#![warn(missing_docs)]

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
    routing::post};
use herald_error::{HeraldErrorKind, HeraldResult, HttpError};
use herald_publish::{PublishPipeline, PublishRequest};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Publish pipeline.
    pub pipeline: Arc<PublishPipeline>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(pipeline: Arc<PublishPipeline>) -> Self {
        Self { pipeline }
    }
}

/// Creates the API router.
pub fn create_router(pipeline: Arc<PublishPipeline>) -> Router {
    let state = ApiState { pipeline };

    Router::new()
        .route("/health", get(health_check))
        .route("/publish", post(publish_post))
        .with_state(state)
}

/// Bind the API router and serve it until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`HttpError`] when the address cannot be bound or the
/// server exits with an error.
pub async fn serve(router: Router, addr: &str) -> HeraldResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", addr, e)))?;

    info!(addr = %addr, "API server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;

    Ok(())
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Publish entry point.
///
/// Responds 400 for missing required fields, 200 with the platform
/// response on success and 500 with the error text on any other
/// failure path.
#[instrument(skip(state, request))]
async fn publish_post(
    State(state): State<ApiState>,
    Json(request): Json<PublishRequest>,
) -> impl IntoResponse {
    match state.pipeline.publish(&request).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "result": receipt.result(),
                "platform": receipt.platform(),
            })),
        ),
        Err(e) => {
            let status = match e.kind() {
                HeraldErrorKind::Validation(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(json!({ "success": false, "error": e.message() })),
            )
        }
    }
}
