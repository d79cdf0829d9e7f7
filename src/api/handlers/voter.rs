//! Voter handlers: list, get, register, update email, delete.

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

const SELECT_VOTERS: &str = "SELECT * FROM voters ORDER BY last_name";

const SELECT_VOTER: &str = "SELECT * FROM voters WHERE id = ?";

const INSERT_VOTER: &str = "INSERT INTO voters (first_name, last_name, email) VALUES (?, ?, ?)";

const UPDATE_VOTER_EMAIL: &str = "UPDATE voters SET email = ? WHERE id = ?";

const DELETE_VOTER: &str = "DELETE FROM voters WHERE id = ?";

/// `GET /api/voters` — List all voters ordered by last name.
///
/// # Errors
///
/// Returns [`ApiError::Read`] (500) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/voters",
    tag = "Voters",
    summary = "List voters",
    description = "Returns every registered voter, ordered by last name.",
    responses(
        (status = 200, description = "Voter list", body = ListResponse),
        (status = 500, description = "Store read failure", body = serde_json::Value),
    )
)]
pub async fn list_voters(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = state
        .store
        .query_all(SELECT_VOTERS, &[])
        .await
        .map_err(ApiError::read)?;

    Ok(Json(ListResponse {
        message: "success".to_string(),
        data: rows,
    }))
}

/// `GET /api/voter/{id}` — Get a single voter.
///
/// Answers 200 with `data: null` when no row has that id.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/voter/{id}",
    tag = "Voters",
    summary = "Get a voter",
    params(
        ("id" = i64, Path, description = "Voter row id"),
    ),
    responses(
        (status = 200, description = "Voter or null", body = ItemResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn get_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = state
        .store
        .query_one(SELECT_VOTER, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(ItemResponse {
        message: "success".to_string(),
        data: row,
    }))
}

/// `POST /api/voter` — Register a voter.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (400) when a required field is missing
/// or blank, or [`ApiError::Statement`] (400) when the insert fails.
#[utoipa::path(
    post,
    path = "/api/voter",
    tag = "Voters",
    summary = "Register a voter",
    description = "Requires first_name, last_name, and email. \
                   Echoes the body back with the generated id.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Voter registered", body = CreatedResponse),
        (status = 400, description = "Missing fields or statement failure", body = serde_json::Value),
    )
)]
pub async fn create_voter(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = require_fields(&body, &["first_name", "last_name", "email"]);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let args = [
        SqlArg::from_json(body.get("first_name")),
        SqlArg::from_json(body.get("last_name")),
        SqlArg::from_json(body.get("email")),
    ];
    let result = state
        .store
        .execute(INSERT_VOTER, &args)
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(CreatedResponse {
        message: "success".to_string(),
        data: body,
        id: result.inserted_id,
    }))
}

/// `PUT /api/voter/{id}` — Update a voter's email address.
///
/// A missing id is not an error: the response reports `changes: 0`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (400) when `email` is missing or
/// blank, or [`ApiError::Statement`] (400) when the update fails.
#[utoipa::path(
    put,
    path = "/api/voter/{id}",
    tag = "Voters",
    summary = "Update a voter's email",
    description = "Updates email, the one mutable voter field.",
    params(
        ("id" = i64, Path, description = "Voter row id"),
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Update outcome with change count", body = UpdatedResponse),
        (status = 400, description = "Missing email or statement failure", body = serde_json::Value),
    )
)]
pub async fn update_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = require_fields(&body, &["email"]);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let args = [SqlArg::from_json(body.get("email")), SqlArg::Int(id)];
    let result = state
        .store
        .execute(UPDATE_VOTER_EMAIL, &args)
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(UpdatedResponse {
        message: "success".to_string(),
        data: body,
        changes: result.rows_affected,
    }))
}

/// `DELETE /api/voter/{id}` — Delete a voter.
///
/// A missing id is not an error: the response reports `changes: 0`. The
/// voter's votes cascade away with the row.
///
/// # Errors
///
/// Returns [`ApiError::Statement`] (400) when the delete fails.
#[utoipa::path(
    delete,
    path = "/api/voter/{id}",
    tag = "Voters",
    summary = "Delete a voter",
    params(
        ("id" = i64, Path, description = "Voter row id"),
    ),
    responses(
        (status = 200, description = "Delete outcome with change count", body = DeletedResponse),
        (status = 400, description = "Statement failure", body = serde_json::Value),
    )
)]
pub async fn delete_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .store
        .execute(DELETE_VOTER, &[SqlArg::Int(id)])
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(DeletedResponse {
        message: "deleted".to_string(),
        changes: result.rows_affected,
    }))
}

/// Voter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/voters", get(list_voters).fallback(not_found))
        .route("/voter", post(create_voter).fallback(not_found))
        .route(
            "/voter/{id}",
            get(get_voter)
                .put(update_voter)
                .delete(delete_voter)
                .fallback(not_found),
        )
}
