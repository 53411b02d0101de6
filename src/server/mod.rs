//! The HTTP boundary: request parsing, status codes and wiring of the
//! prober and directory into axum.

pub mod middleware;
pub mod response;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::directory::Directory;
use crate::http_probe::prelude::*;

/// Shared, read-only handles every handler gets.
#[derive(Clone)]
pub struct AppState {
    pub prober: Prober,
    pub directory: Arc<Directory>,
    pub sweep_concurrency: usize,
}

impl AppState {
    pub fn new(prober: Prober, directory: Directory, sweep_concurrency: usize) -> Self {
        Self {
            prober,
            directory: Arc::new(directory),
            sweep_concurrency,
        }
    }
}

/// Build the complete application router.
pub fn app(state: AppState, utc_offset_hours: i32) -> Router {
    routes::routes(utc_offset(utc_offset_hours))
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn serve(config: &AppConfig, state: AppState) -> std::io::Result<()> {
    let addr: SocketAddr = config.server.bind_addr;
    let app = app(state, config.probe.utc_offset_hours);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
