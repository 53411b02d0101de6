//! HTTP route entry point.
//!
//! - `/health` → liveness
//! - `/api/check`, `/api/services/{id}/check`, `/api/sweep` → probes
//! - `/api/services`, `/api/services/{id}`, `/api/categories` → directory

use axum::Router;
use chrono::FixedOffset;

use crate::server::AppState;

pub mod check;
pub mod health;
pub mod services;

pub fn routes(offset: FixedOffset) -> Router<AppState> {
    let api = Router::new()
        .merge(check::check_routes(offset))
        .merge(services::services_routes());

    Router::new()
        .nest("/health", health::health_routes())
        .nest("/api", api)
}
