//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for request handlers. Every
//! variant serializes to a JSON body of the shape `{"error": ...}`, where
//! `error` is an array of messages for validation failures and a single
//! string otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Handler-level error with HTTP status mapping.
///
/// The 400-vs-500 split mirrors the endpoint classes: list and aggregate
/// reads surface store failures as 500, single-row reads and all writes
/// surface them as 400. Absent rows are never an error; they produce an
/// empty success payload or a zero-change count instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more required fields were missing or blank.
    #[error("invalid request body")]
    Validation(Vec<String>),

    /// A single-row read or write statement failed.
    #[error("{0}")]
    Statement(String),

    /// A list or aggregate read failed.
    #[error("{0}")]
    Read(String),
}

impl ApiError {
    /// Wraps a store failure from a write or single-row read (→ 400).
    #[must_use]
    pub fn statement(err: StoreError) -> Self {
        Self::Statement(err.message)
    }

    /// Wraps a store failure from a list or aggregate read (→ 500).
    #[must_use]
    pub fn read(err: StoreError) -> Self {
        Self::Read(err.message)
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Statement(_) => StatusCode::BAD_REQUEST,
            Self::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Validation(messages) => serde_json::json!({ "error": messages }),
            Self::Statement(message) | Self::Read(message) => {
                serde_json::json!({ "error": message })
            }
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation(vec!["No email specified.".into()]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn read_maps_to_500() {
        let err = ApiError::Read("disk I/O error".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn statement_maps_to_400() {
        let err = ApiError::statement(StoreError {
            message: "FOREIGN KEY constraint failed".into(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
