pub mod artist_handler;
pub mod auth_handler;
pub mod payment_handler;

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;
use tracing::error;

use crate::domain::error::DomainError;

/// Single conversion point from domain failures to HTTP. Validation is the
/// user's problem; everything else is logged here and reduced to one
/// banner-friendly string, never a raw backend error.
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
        DomainError::Dispatch(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = ?err, "request failed");
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
