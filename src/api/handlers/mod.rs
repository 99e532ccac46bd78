//! HTTP handlers for the catalog API.

mod actors;
mod directors;
mod genres;
mod movies;
mod system;

#[cfg(test)]
mod actors_test;
#[cfg(test)]
mod test_helpers;

pub use actors::*;
pub use directors::*;
pub use genres::*;
pub use movies::*;
pub use system::*;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Movie not found")]
    pub detail: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, detail: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

/// Translate a repository error into a status code and body.
///
/// Missing entities answer `404 {"detail": "<Entity> not found"}`.
pub(crate) fn db_error_response(e: DbError) -> HandlerError {
    match e {
        DbError::NotFound { entity_type, .. } => {
            error_response(StatusCode::NOT_FOUND, format!("{} not found", entity_type))
        }
        DbError::Constraint { message } => error_response(StatusCode::CONFLICT, message),
        DbError::Reference { .. } => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        _ => {
            error!(error = %e, "request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
