//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Resource endpoints are mounted under `/api`; anything that matches no
//! registered method+path combination falls through to a bare 404.

pub mod dto;
pub mod handlers;

use axum::Router;
use axum::http::StatusCode;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
///
/// The catch-all fallback is attached here, after every resource route,
/// and again per method router so a wrong verb on a known path also
/// answers 404 rather than 405.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
        .fallback(not_found)
}

/// Catch-all for unmatched requests: 404 with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
