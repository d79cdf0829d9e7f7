//! Candidate handlers: list, get, create, assign party, delete.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreatedResponse, DeletedResponse, ItemResponse, ListResponse, UpdatedResponse,
};
use crate::api::not_found;
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::store::SqlArg;
use crate::validate::require_fields;

/// Candidate rows joined to their party name (null for independents).
const SELECT_CANDIDATES: &str = "SELECT candidates.*, parties.name AS party_name \
     FROM candidates \
     LEFT JOIN parties ON candidates.party_id = parties.id";

const SELECT_CANDIDATE: &str = "SELECT candidates.*, parties.name AS party_name \
     FROM candidates \
     LEFT JOIN parties ON candidates.party_id = parties.id \
     WHERE candidates.id = ?";

const INSERT_CANDIDATE: &str =
    "INSERT INTO candidates (first_name, last_name, industry_connected) VALUES (?, ?, ?)";

const UPDATE_CANDIDATE_PARTY: &str = "UPDATE candidates SET party_id = ? WHERE id = ?";

const DELETE_CANDIDATE: &str = "DELETE FROM candidates WHERE id = ?";

/// `GET /api/candidates` — List all candidates with their party names.
///
/// # Errors
///
/// Returns [`ApiError::Read`] (500) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/candidates",
    tag = "Candidates",
    summary = "List candidates",
    description = "Returns every candidate joined to its party name.",
    responses(
        (status = 200, description = "Candidate list", body = ListResponse),
        (status = 500, description = "Store read failure", body = serde_json::Value),
    )
)]
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state
        .store
        .query_all(SELECT_CANDIDATES, &[])
        .await
        .map_err(ApiError::read)?;

    Ok(Json(ListResponse {
        message: "success".to_string(),
        data: rows,
    }))
}

/// `GET /api/candidate/{id}` — Get a single candidate.
///
/// Answers 200 with `data: null` when no row has that id.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/candidate/{id}",
    tag = "Candidates",
    summary = "Get a candidate",
    description = "Returns one candidate joined to its party name, or null data when absent.",
    params(
        ("id" = i64, Path, description = "Candidate row id"),
    ),
    responses(
        (status = 200, description = "Candidate or null", body = ItemResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = state
        .store
        .query_one(SELECT_CANDIDATE, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(ItemResponse {
        message: "success".to_string(),
        data: row,
    }))
}

/// `POST /api/candidate` — Create a candidate.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (400) when a required field is missing
/// or blank, or [`ApiError::Statement`] (400) when the insert fails.
#[utoipa::path(
    post,
    path = "/api/candidate",
    tag = "Candidates",
    summary = "Create a candidate",
    description = "Requires first_name, last_name, and industry_connected. \
                   Echoes the body back with the generated id.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Candidate created", body = CreatedResponse),
        (status = 400, description = "Missing fields or statement failure", body = serde_json::Value),
    )
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = require_fields(&body, &["first_name", "last_name", "industry_connected"]);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let args = [
        SqlArg::from_json(body.get("first_name")),
        SqlArg::from_json(body.get("last_name")),
        SqlArg::from_json(body.get("industry_connected")),
    ];
    let result = state
        .store
        .execute(INSERT_CANDIDATE, &args)
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(CreatedResponse {
        message: "success".to_string(),
        data: body,
        id: result.inserted_id,
    }))
}

/// `PUT /api/candidate/{id}` — Assign a candidate to a party.
///
/// A missing id is not an error: the response reports `changes: 0`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (400) when `party_id` is missing, or
/// [`ApiError::Statement`] (400) when the update fails (including a
/// foreign-key violation on an unknown party).
#[utoipa::path(
    put,
    path = "/api/candidate/{id}",
    tag = "Candidates",
    summary = "Assign a candidate's party",
    description = "Updates party_id, the one mutable candidate field.",
    params(
        ("id" = i64, Path, description = "Candidate row id"),
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Update outcome with change count", body = UpdatedResponse),
        (status = 400, description = "Missing party_id or statement failure", body = serde_json::Value),
    )
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = require_fields(&body, &["party_id"]);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let args = [SqlArg::from_json(body.get("party_id")), SqlArg::Int(id)];
    let result = state
        .store
        .execute(UPDATE_CANDIDATE_PARTY, &args)
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(UpdatedResponse {
        message: "success".to_string(),
        data: body,
        changes: result.rows_affected,
    }))
}

/// `DELETE /api/candidate/{id}` — Delete a candidate.
///
/// A missing id is not an error: the response reports `changes: 0`.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the delete fails.
#[utoipa::path(
    delete,
    path = "/api/candidate/{id}",
    tag = "Candidates",
    summary = "Delete a candidate",
    params(
        ("id" = i64, Path, description = "Candidate row id"),
    ),
    responses(
        (status = 200, description = "Delete outcome with change count", body = DeletedResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .store
        .execute(DELETE_CANDIDATE, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(DeletedResponse {
        message: "successfully deleted".to_string(),
        changes: result.rows_affected,
    }))
}

/// Candidate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/candidates", get(list_candidates).fallback(not_found))
        .route("/candidate", post(create_candidate).fallback(not_found))
        .route(
            "/candidate/{id}",
            get(get_candidate)
                .put(update_candidate)
                .delete(delete_candidate)
                .fallback(not_found),
        )
}
