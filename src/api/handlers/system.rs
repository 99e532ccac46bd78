//! System health and status handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

/// Root response
#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    /// Welcome message
    #[schema(example = "Welcome to Movie Catalog API")]
    pub message: String,
    /// Path of the interactive API documentation
    #[schema(example = "/docs")]
    pub docs: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
}

/// API root
///
/// Points clients at the documentation
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Welcome message", body = RootResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Movie Catalog API".to_string(),
        docs: "/docs".to_string(),
    })
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
