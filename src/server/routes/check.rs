//! Endpoints that dispatch probes. Every one of them answers with a
//! `CheckResult` (or a list of them), even when the check itself could not
//! be carried out.

use std::any::Any;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::FixedOffset;
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;

use crate::http_probe::prelude::*;
use crate::server::AppState;
use crate::server::response::ApiResponse;
use crate::sweep::sweep;

#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    url: Option<String>,
}

pub fn check_routes(offset: FixedOffset) -> Router<AppState> {
    Router::new()
        .route("/check", post(check_url))
        .route("/services/{id}/check", post(check_service))
        .route("/sweep", post(check_all))
        .layer(CatchPanicLayer::custom(check_failed_on_panic(offset)))
}

/// Turns a panic inside a check handler into the generic failure result,
/// so callers never see an opaque 500.
pub fn check_failed_on_panic(
    offset: FixedOffset,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |err: Box<dyn Any + Send + 'static>| {
        let detail = err
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| err.downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        log::error!("Check handler panicked: {detail}");
        Json(CheckResult::check_failed(None, capture_timestamp(offset))).into_response()
    }
}

/// POST /check
///
/// Body `{ "url": "..." }`. A missing or blank url is `400`; a body that
/// is not JSON is reported as a failed check; everything else is `200`
/// with the probe's result.
async fn check_url(State(state): State<AppState>, body: Bytes) -> Response {
    let request: CheckRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Unreadable check request: {e}");
            let result = CheckResult::check_failed(None, state.prober.timestamp());
            return (StatusCode::OK, Json(result)).into_response();
        }
    };

    let result = state.prober.check_reachability(request.url.as_deref()).await;
    let status = if result.is_input_required() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(result)).into_response()
}

/// POST /services/{id}/check
async fn check_service(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(record) = state.directory.get_by_id(&id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Service not found")),
        )
            .into_response();
    };

    let result = state.prober.check_reachability(Some(&record.url)).await;
    Json(result).into_response()
}

/// POST /sweep
///
/// Checks every directory record and returns `{ "results": [...] }` in
/// directory order.
async fn check_all(State(state): State<AppState>) -> Response {
    log::info!(
        "Sweeping {} services (concurrency {})",
        state.directory.len(),
        state.sweep_concurrency
    );
    let report = sweep(&state.prober, state.directory.records(), state.sweep_concurrency).await;
    log::info!(
        "Sweep finished: {}/{} online",
        report.online_count(),
        report.results.len()
    );
    Json(report).into_response()
}
