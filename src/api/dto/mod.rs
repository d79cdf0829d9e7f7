//! Response envelopes shared across the resource handlers.
//!
//! Every success response carries a `message` field; the rest of the shape
//! depends on the operation class (list, single item, create, update,
//! delete). Rows come straight out of the store as JSON objects, so the
//! envelopes carry [`JsonRow`] values rather than typed models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::store::JsonRow;

/// Envelope for list and aggregate reads: `{message, data: [row...]}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    /// Always `"success"` on the success path.
    pub message: String,
    /// The matching rows, possibly empty.
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<JsonRow>,
}

/// Envelope for single-item reads: `{message, data: row | null}`.
///
/// An absent row is not a 404: the store does not distinguish "not found"
/// from "empty result", so the handler answers 200 with `data: null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Always `"success"` on the success path.
    pub message: String,
    /// The matching row, or null when no row has that id.
    #[schema(value_type = Option<Object>)]
    pub data: Option<JsonRow>,
}

/// Envelope for creates: `{message, data, id}` with the submitted body
/// echoed back and the generated row id.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Always `"success"` on the success path.
    pub message: String,
    /// The request body, echoed back verbatim.
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    /// Row id generated by the store.
    pub id: i64,
}

/// Envelope for updates: `{message, data, changes}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedResponse {
    /// Always `"success"` on the success path.
    pub message: String,
    /// The request body, echoed back verbatim.
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    /// Rows changed: 0 when the id did not exist, which is still success.
    pub changes: u64,
}

/// Envelope for deletes: `{message, changes}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    /// Deletion acknowledgement message.
    pub message: String,
    /// Rows deleted: 0 when the id did not exist, which is still success.
    pub changes: u64,
}
