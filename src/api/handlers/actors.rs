//! Actor handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::{ErrorResponse, HandlerError, MovieSummaryResponse, db_error_response};
use crate::api::AppState;
use crate::db::{
    Actor, ActorQuery, ActorRepository, ActorWithMovies, Database, Id, NewActor,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Actor response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: Id,
    /// Actor name
    #[schema(example = "Leonardo DiCaprio")]
    pub name: String,
    /// Year of birth
    #[schema(example = 1974)]
    pub birth_year: Option<i32>,
    /// Short biography
    pub bio: Option<String>,
}

impl From<Actor> for ActorResponse {
    fn from(a: Actor) -> Self {
        Self {
            id: a.id,
            name: a.name,
            birth_year: a.birth_year,
            bio: a.bio,
        }
    }
}

/// Actor with filmography DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ActorWithMoviesResponse {
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "Leonardo DiCaprio")]
    pub name: String,
    #[schema(example = 1974)]
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
    /// Movies the actor appears in, in creation order
    pub movies: Vec<MovieSummaryResponse>,
}

impl From<ActorWithMovies> for ActorWithMoviesResponse {
    fn from(a: ActorWithMovies) -> Self {
        Self {
            id: a.actor.id,
            name: a.actor.name,
            birth_year: a.actor.birth_year,
            bio: a.actor.bio,
            movies: a
                .movies
                .into_iter()
                .map(MovieSummaryResponse::from)
                .collect(),
        }
    }
}

/// Create actor request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateActorRequest {
    /// Actor name
    #[schema(example = "Leonardo DiCaprio")]
    pub name: String,
    /// Year of birth
    #[schema(example = 1974)]
    pub birth_year: Option<i32>,
    /// Short biography
    pub bio: Option<String>,
}

impl From<CreateActorRequest> for NewActor {
    fn from(req: CreateActorRequest) -> Self {
        Self {
            name: req.name,
            birth_year: req.birth_year,
            bio: req.bio,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListActorsQuery {
    /// Filter by movie ID
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 1)]
    pub movie_id: Option<Id>,
    /// Filter by genre ID (based on the movies they acted in)
    #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
    #[param(example = 1)]
    pub genre_id: Option<Id>,
}

impl From<ListActorsQuery> for ActorQuery {
    fn from(q: ListActorsQuery) -> Self {
        Self {
            movie_id: q.movie_id,
            genre_id: q.genre_id,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List actors
///
/// Returns all actors, optionally filtered by movie and by genre. Both
/// filters must match when given.
#[utoipa::path(
    get,
    path = "/api/actors/",
    tag = "actors",
    params(ListActorsQuery),
    responses(
        (status = 200, description = "List of actors", body = Vec<ActorResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_actors<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListActorsQuery>,
) -> Result<Json<Vec<ActorResponse>>, HandlerError> {
    let actors = state
        .db()
        .actors()
        .list(&ActorQuery::from(query))
        .await
        .map_err(db_error_response)?;

    Ok(Json(actors.into_iter().map(ActorResponse::from).collect()))
}

/// Get an actor by ID
///
/// Returns the actor with their filmography
#[utoipa::path(
    get,
    path = "/api/actors/{id}",
    tag = "actors",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor found", body = ActorWithMoviesResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_actor<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<ActorWithMoviesResponse>, HandlerError> {
    let actor = state
        .db()
        .actors()
        .get_with_movies(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(ActorWithMoviesResponse::from(actor)))
}

/// Create a new actor
#[utoipa::path(
    post,
    path = "/api/actors/",
    tag = "actors",
    request_body = CreateActorRequest,
    responses(
        (status = 200, description = "Actor created", body = ActorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_actor<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateActorRequest>,
) -> Result<Json<ActorResponse>, HandlerError> {
    let actor = state
        .db()
        .actors()
        .create(&NewActor::from(req))
        .await
        .map_err(db_error_response)?;

    Ok(Json(ActorResponse::from(actor)))
}
