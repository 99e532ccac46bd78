//! Genre handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, db_error_response};
use crate::api::AppState;
use crate::db::{Database, Genre, GenreRepository, Id, NewGenre};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Genre response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: Id,
    /// Genre name, unique across the catalog
    #[schema(example = "Action")]
    pub name: String,
    /// Optional description
    #[schema(example = "High-energy films with intense sequences")]
    pub description: Option<String>,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
            description: g.description,
        }
    }
}

/// Create genre request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGenreRequest {
    /// Genre name
    #[schema(example = "Action")]
    pub name: String,
    /// Optional description
    #[schema(example = "High-energy films with intense sequences")]
    pub description: Option<String>,
}

impl From<CreateGenreRequest> for NewGenre {
    fn from(req: CreateGenreRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all genres
#[utoipa::path(
    get,
    path = "/api/genres/",
    tag = "genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<GenreResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_genres<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<GenreResponse>>, HandlerError> {
    let genres = state
        .db()
        .genres()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// Get a genre by ID
#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    tag = "genres",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_genre<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<GenreResponse>, HandlerError> {
    let genre = state
        .db()
        .genres()
        .get(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(GenreResponse::from(genre)))
}

/// Create a new genre
///
/// Genre names are unique; a duplicate name is rejected with 409
#[utoipa::path(
    post,
    path = "/api/genres/",
    tag = "genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Genre created", body = GenreResponse),
        (status = 409, description = "Genre name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_genre<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateGenreRequest>,
) -> Result<Json<GenreResponse>, HandlerError> {
    let genre = state
        .db()
        .genres()
        .create(&NewGenre::from(req))
        .await
        .map_err(db_error_response)?;

    Ok(Json(GenreResponse::from(genre)))
}
