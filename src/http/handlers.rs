use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use thiserror::Error;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routes::{RouteEntry, RouteTable};

/// Errors surfaced to API clients as JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown route id: {0}")]
    UnknownRoute(String),

    #[error("no route is active for path: {0}")]
    NoActiveRoute(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownRoute(_) | ApiError::NoActiveRoute(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ActiveQuery {
    pub path: String,
}

/// The layout data: `{ "routes": [...] }`.
pub async fn get_routes(State(state): State<AppState>) -> Json<RouteTable> {
    metrics::record_request("routes");
    let table = state.table();
    Json(RouteTable::clone(&table))
}

pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteEntry>, ApiError> {
    metrics::record_request("route");
    let table = state.table();
    match table.get(&id) {
        Some(entry) => Ok(Json(entry.clone())),
        None => {
            tracing::debug!(id = %id, "Unknown route id requested");
            Err(ApiError::UnknownRoute(id))
        }
    }
}

pub async fn get_active_route(
    State(state): State<AppState>,
    Query(query): Query<ActiveQuery>,
) -> Result<Json<RouteEntry>, ApiError> {
    metrics::record_request("active");
    let table = state.table();
    table
        .active(state.base_path(), &query.path)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NoActiveRoute(query.path))
}

pub async fn health() -> &'static str {
    "ok"
}
