use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::server::AppState;
use crate::server::response::ApiResponse;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Liveness of this service only; it never probes anything.
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
