//! Local HTTP targets for probe tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::config::ProbeSettings;
use crate::http_probe::prelude::Prober;

/// Serve a fixed set of endpoints on an ephemeral port and return the base URL.
pub async fn spawn_target() -> String {
    let app = Router::new()
        .route("/ok", get(|| async { "up" }))
        .route("/no-content", get(|| async { StatusCode::NO_CONTENT }))
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/redirect", get(|| async { redirect_to("/ok") }))
        .route("/redirect-to-missing", get(|| async { redirect_to("/missing") }))
        .route("/loop", get(|| async { redirect_to("/loop") }))
        .route("/found-no-location", get(|| async { StatusCode::FOUND }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test target");
    let addr = listener.local_addr().expect("test target address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

fn redirect_to(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// A URL on a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway port");
    let addr: SocketAddr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{addr}/")
}

pub fn fast_prober() -> Prober {
    let settings = ProbeSettings {
        timeout_seconds: 1,
        use_system_proxy: false,
        ..ProbeSettings::default()
    };
    Prober::new(&settings).expect("build test prober")
}
