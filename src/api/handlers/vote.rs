//! Vote handlers: tally and cast.
//!
//! Nothing prevents a voter from voting more than once; every POST inserts
//! a new row and the tally counts them all.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreatedResponse, ListResponse};
use crate::api::not_found;
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::store::SqlArg;
use crate::validate::require_fields;

/// Vote counts per candidate, most votes first. Ties land in whatever
/// order SQLite groups them.
const SELECT_VOTE_TALLY: &str =
    "SELECT candidates.*, parties.name AS party_name, COUNT(candidate_id) AS count \
     FROM votes \
     LEFT JOIN candidates ON votes.candidate_id = candidates.id \
     LEFT JOIN parties ON candidates.party_id = parties.id \
     GROUP BY candidate_id ORDER BY count DESC";

const INSERT_VOTE: &str = "INSERT INTO votes (voter_id, candidate_id) VALUES (?, ?)";

/// `GET /api/votes` — Tally votes grouped by candidate.
///
/// # Errors
///
/// Returns [`ApiError::Read`] (500) when the store read fails.
#[utoipa::path(
    get,
    path = "/api/votes",
    tag = "Votes",
    summary = "Tally votes",
    description = "Returns each voted-for candidate with its party name and vote count, \
                   ordered by descending count.",
    responses(
        (status = 200, description = "Vote tally", body = ListResponse),
        (status = 500, description = "Store read failure", body = serde_json::Value),
    )
)]
pub async fn list_votes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = state
        .store
        .query_all(SELECT_VOTE_TALLY, &[])
        .await
        .map_err(ApiError::read)?;

    Ok(Json(ListResponse {
        message: "success".to_string(),
        data: rows,
    }))
}

/// `POST /api/vote` — Cast a vote.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (400) when `voter_id` or
/// `candidate_id` is missing, or [`ApiError::Statement`] (400) when the
/// insert fails (including foreign-key violations on unknown ids).
#[utoipa::path(
    post,
    path = "/api/vote",
    tag = "Votes",
    summary = "Cast a vote",
    description = "Requires voter_id and candidate_id, both referencing existing rows.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Vote recorded", body = CreatedResponse),
        (status = 400, description = "Missing fields or statement failure", body = serde_json::Value),
    )
)]
pub async fn create_vote(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = require_fields(&body, &["voter_id", "candidate_id"]);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let args = [
        SqlArg::from_json(body.get("voter_id")),
        SqlArg::from_json(body.get("candidate_id")),
    ];
    let result = state
        .store
        .execute(INSERT_VOTE, &args)
        .await
        .map_err(ApiError::statement)?;

    Ok(Json(CreatedResponse {
        message: "success".to_string(),
        data: body,
        id: result.inserted_id,
    }))
}

/// Vote routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/votes", get(list_votes).fallback(not_found))
        .route("/vote", post(create_vote).fallback(not_found))
}
