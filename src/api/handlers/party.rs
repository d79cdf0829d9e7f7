//! Party handlers: list, get, delete.
//!
//! Parties have no create or update endpoint; rows arrive through seeding
//! or direct store access. Deleting a party nulls out the `party_id` of
//! its candidates via the schema's ON DELETE SET NULL.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{DeletedResponse, ItemResponse, ListResponse};
use crate::api::not_found;
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::store::SqlArg;

const SELECT_PARTIES: &str = "SELECT * FROM parties";

const SELECT_PARTY: &str = "SELECT * FROM parties WHERE id = ?";

const DELETE_PARTY: &str = "DELETE FROM parties WHERE id = ?";

/// `GET /api/parties` — List all parties.
///
/// # Errors
///
/// Returns [`ApiError::Read`] (500) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/parties",
    tag = "Parties",
    summary = "List parties",
    responses(
        (status = 200, description = "Party list", body = ListResponse),
        (status = 500, description = "Store read failure", body = serde_json::Value),
    )
)]
pub async fn list_parties(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = state
        .store
        .query_all(SELECT_PARTIES, &[])
        .await
        .map_err(ApiError::read)?;

    Ok(Json(ListResponse {
        message: "success".to_string(),
        data: rows,
    }))
}

/// `GET /api/party/{id}` — Get a single party.
///
/// Answers 200 with `data: null` when no row has that id.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/party/{id}",
    tag = "Parties",
    summary = "Get a party",
    params(
        ("id" = i64, Path, description = "Party row id"),
    ),
    responses(
        (status = 200, description = "Party or null", body = ItemResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn get_party(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = state
        .store
        .query_one(SELECT_PARTY, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(ItemResponse {
        message: "success".to_string(),
        data: row,
    }))
}

/// `DELETE /api/party/{id}` — Delete a party.
///
/// A missing id is not an error: the response reports `changes: 0`.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the delete fails.
#[utoipa::path(
    delete,
    path = "/api/party/{id}",
    tag = "Parties",
    summary = "Delete a party",
    description = "Candidates in the deleted party become independents (party_id null).",
    params(
        ("id" = i64, Path, description = "Party row id"),
    ),
    responses(
        (status = 200, description = "Delete outcome with change count", body = DeletedResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn delete_party(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .store
        .execute(DELETE_PARTY, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(DeletedResponse {
        message: "successfully deleted".to_string(),
        changes: result.rows_affected,
    }))
}

/// Party routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parties", get(list_parties).fallback(not_found))
        .route(
            "/party/{id}",
            get(get_party).delete(delete_party).fallback(not_found),
        )
}
