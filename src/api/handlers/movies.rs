//! Movie handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::{
    ActorResponse, DirectorResponse, ErrorResponse, GenreResponse, HandlerError,
    db_error_response,
};
use crate::api::AppState;
use crate::db::{
    Database, Id, MovieDetail, MovieQuery, MovieRepository, MovieSummary, NewMovie,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Movie summary DTO used in list views
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSummaryResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: Id,
    /// Movie title
    #[schema(example = "Inception")]
    pub title: String,
    /// Year of release
    #[schema(example = 2010)]
    pub release_year: i32,
    /// Optional synopsis
    pub synopsis: Option<String>,
    /// Running time in minutes
    #[schema(example = 148)]
    pub duration: Option<i32>,
    /// Director, if one is set
    pub director: Option<DirectorResponse>,
}

impl From<MovieSummary> for MovieSummaryResponse {
    fn from(m: MovieSummary) -> Self {
        Self {
            id: m.id,
            title: m.title,
            release_year: m.release_year,
            synopsis: m.synopsis,
            duration: m.duration,
            director: m.director.map(DirectorResponse::from),
        }
    }
}

/// Full movie DTO with cast and genres
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: Id,
    /// Movie title
    #[schema(example = "Inception")]
    pub title: String,
    /// Year of release
    #[schema(example = 2010)]
    pub release_year: i32,
    /// Optional synopsis
    pub synopsis: Option<String>,
    /// Running time in minutes
    #[schema(example = 148)]
    pub duration: Option<i32>,
    /// Director, if one is set
    pub director: Option<DirectorResponse>,
    /// Cast
    pub actors: Vec<ActorResponse>,
    /// Genres
    pub genres: Vec<GenreResponse>,
}

impl From<MovieDetail> for MovieResponse {
    fn from(m: MovieDetail) -> Self {
        Self {
            id: m.id,
            title: m.title,
            release_year: m.release_year,
            synopsis: m.synopsis,
            duration: m.duration,
            director: m.director.map(DirectorResponse::from),
            actors: m.actors.into_iter().map(ActorResponse::from).collect(),
            genres: m.genres.into_iter().map(GenreResponse::from).collect(),
        }
    }
}

/// Create movie request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    /// Movie title
    #[schema(example = "Inception")]
    pub title: String,
    /// Year of release
    #[schema(example = 2010)]
    pub release_year: i32,
    /// Director ID; must reference an existing director
    #[schema(example = 1)]
    pub director_id: Id,
    /// Optional synopsis
    pub synopsis: Option<String>,
    /// Running time in minutes
    #[schema(example = 148)]
    pub duration: Option<i32>,
    /// Actor IDs to link; unknown IDs are ignored
    #[serde(default)]
    pub actor_ids: Vec<Id>,
    /// Genre IDs to link; unknown IDs are ignored
    #[serde(default)]
    pub genre_ids: Vec<Id>,
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            release_year: req.release_year,
            director_id: Some(req.director_id),
            synopsis: req.synopsis,
            duration: req.duration,
            actor_ids: req.actor_ids,
            genre_ids: req.genre_ids,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMoviesQuery {
    /// Filter by genre ID
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 1)]
    pub genre_id: Option<Id>,
    /// Filter by director ID
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 1)]
    pub director_id: Option<Id>,
    /// Filter by actor ID
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 1)]
    pub actor_id: Option<Id>,
    /// Filter by release year
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 2010)]
    pub release_year: Option<i32>,
}

impl From<ListMoviesQuery> for MovieQuery {
    fn from(q: ListMoviesQuery) -> Self {
        Self {
            genre_id: q.genre_id,
            director_id: q.director_id,
            actor_id: q.actor_id,
            release_year: q.release_year,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List movies
///
/// Returns movie summaries, optionally filtered by genre, director, actor and
/// release year. All given filters must match.
#[utoipa::path(
    get,
    path = "/api/movies/",
    tag = "movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "List of movie summaries", body = Vec<MovieSummaryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_movies<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Json<Vec<MovieSummaryResponse>>, HandlerError> {
    let movies = state
        .db()
        .movies()
        .list(&MovieQuery::from(query))
        .await
        .map_err(db_error_response)?;

    Ok(Json(
        movies.into_iter().map(MovieSummaryResponse::from).collect(),
    ))
}

/// Get a movie by ID
///
/// Returns the movie with its director, cast and genres
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_movie<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<MovieResponse>, HandlerError> {
    let movie = state
        .db()
        .movies()
        .get_detail(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(MovieResponse::from(movie)))
}

/// Create a new movie
///
/// Links the given actors and genres in the same transaction and returns the
/// full movie
#[utoipa::path(
    post,
    path = "/api/movies/",
    tag = "movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie created", body = MovieResponse),
        (status = 422, description = "Director does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_movie<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateMovieRequest>,
) -> Result<Json<MovieResponse>, HandlerError> {
    let movie = state
        .db()
        .movies()
        .create(&NewMovie::from(req))
        .await
        .map_err(db_error_response)?;

    Ok(Json(MovieResponse::from(movie)))
}
