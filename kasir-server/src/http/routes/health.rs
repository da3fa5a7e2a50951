//! Health check endpoint. Never touches the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health message for the main API
pub const KASIR_API_MESSAGE: &str = "Kasir API Running";

/// Health message for the in-memory category demo
pub const CATEGORY_API_MESSAGE: &str = "Category API Running";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health
async fn health(message: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message,
    })
}

/// Health routes
pub fn router<S>(message: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(move || health(message)))
}
