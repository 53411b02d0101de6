use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::directory::{Category, ServiceRecord};
use crate::server::AppState;
use crate::server::response::ApiResponse;

pub fn services_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/services/{id}", get(get_service))
        .route("/categories", get(list_categories))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategoryGroup<'a> {
    category: Category,
    label: &'static str,
    services: Vec<&'a ServiceRecord>,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: Category,
    label: &'static str,
    count: usize,
}

/// GET /services?q=
///
/// Non-empty categories in display order, names sorted within each.
/// `q` narrows the records by id, name or alias.
async fn list_services(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let q = query.q.unwrap_or_default();
    let groups: Vec<CategoryGroup<'_>> = state
        .directory
        .list_by_category()
        .into_iter()
        .map(|(category, services)| CategoryGroup {
            category,
            label: category.label(),
            services: services.into_iter().filter(|r| r.matches(&q)).collect(),
        })
        .filter(|group| !group.services.is_empty())
        .collect();

    Json(ApiResponse::success(groups, "Services retrieved")).into_response()
}

/// GET /services/{id}
async fn get_service(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.directory.get_by_id(&id) {
        Some(record) => Json(ApiResponse::success(record, "Service found")).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Service not found")),
        )
            .into_response(),
    }
}

/// GET /categories
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let counts: Vec<CategoryCount> = state
        .directory
        .category_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| CategoryCount {
            category,
            label: category.label(),
            count,
        })
        .collect();

    Json(ApiResponse::success(counts, "Categories retrieved"))
}
