//! Director handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, MovieSummaryResponse, db_error_response};
use crate::api::AppState;
use crate::db::{Database, Director, DirectorRepository, DirectorWithMovies, Id, NewDirector};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Director response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: Id,
    /// Director name
    #[schema(example = "Christopher Nolan")]
    pub name: String,
    /// Year of birth
    #[schema(example = 1970)]
    pub birth_year: Option<i32>,
    /// Short biography
    pub bio: Option<String>,
}

impl From<Director> for DirectorResponse {
    fn from(d: Director) -> Self {
        Self {
            id: d.id,
            name: d.name,
            birth_year: d.birth_year,
            bio: d.bio,
        }
    }
}

/// Director with filmography DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorWithMoviesResponse {
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "Christopher Nolan")]
    pub name: String,
    #[schema(example = 1970)]
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
    /// Movies directed, in creation order
    pub movies: Vec<MovieSummaryResponse>,
}

impl From<DirectorWithMovies> for DirectorWithMoviesResponse {
    fn from(d: DirectorWithMovies) -> Self {
        Self {
            id: d.director.id,
            name: d.director.name,
            birth_year: d.director.birth_year,
            bio: d.director.bio,
            movies: d
                .movies
                .into_iter()
                .map(MovieSummaryResponse::from)
                .collect(),
        }
    }
}

/// Create director request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDirectorRequest {
    /// Director name
    #[schema(example = "Christopher Nolan")]
    pub name: String,
    /// Year of birth
    #[schema(example = 1970)]
    pub birth_year: Option<i32>,
    /// Short biography
    pub bio: Option<String>,
}

impl From<CreateDirectorRequest> for NewDirector {
    fn from(req: CreateDirectorRequest) -> Self {
        Self {
            name: req.name,
            birth_year: req.birth_year,
            bio: req.bio,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all directors
#[utoipa::path(
    get,
    path = "/api/directors/",
    tag = "directors",
    responses(
        (status = 200, description = "List of directors", body = Vec<DirectorResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_directors<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<DirectorResponse>>, HandlerError> {
    let directors = state
        .db()
        .directors()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(
        directors.into_iter().map(DirectorResponse::from).collect(),
    ))
}

/// Get a director by ID
///
/// Returns the director with their filmography
#[utoipa::path(
    get,
    path = "/api/directors/{id}",
    tag = "directors",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    responses(
        (status = 200, description = "Director found", body = DirectorWithMoviesResponse),
        (status = 404, description = "Director not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_director<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<DirectorWithMoviesResponse>, HandlerError> {
    let director = state
        .db()
        .directors()
        .get_with_movies(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(DirectorWithMoviesResponse::from(director)))
}

/// Create a new director
#[utoipa::path(
    post,
    path = "/api/directors/",
    tag = "directors",
    request_body = CreateDirectorRequest,
    responses(
        (status = 200, description = "Director created", body = DirectorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_director<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateDirectorRequest>,
) -> Result<Json<DirectorResponse>, HandlerError> {
    let director = state
        .db()
        .directors()
        .create(&NewDirector::from(req))
        .await
        .map_err(db_error_response)?;

    Ok(Json(DirectorResponse::from(director)))
}
