//! REST endpoint handlers organized by resource.

pub mod candidate;
pub mod party;
pub mod system;
pub mod vote;
pub mod voter;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(candidate::routes())
        .merge(party::routes())
        .merge(voter::routes())
        .merge(vote::routes())
}
