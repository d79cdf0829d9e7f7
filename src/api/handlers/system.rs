//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    store: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service and store health status.
///
/// Answers 200 when a trivial statement runs against the store, 500 when
/// it does not.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Runs a trivial statement against the election database and reports \
                   service status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 500, description = "Store is unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store_status = state.store.query_one("SELECT 1", &[]).await;
    let (status, store) = match store_status {
        Ok(_) => (StatusCode::OK, "open"),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "unreachable"),
    };

    (
        status,
        Json(HealthResponse {
            status: if status == StatusCode::OK {
                "healthy".to_string()
            } else {
                "degraded".to_string()
            },
            store: store.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
