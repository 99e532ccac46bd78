//! Domain models for the movie catalog.
//!
//! These models are storage-agnostic. Relationships are carried as ids or as
//! explicitly fetched lists, never as live references between entities.

use serde::{Deserialize, Serialize};

/// Integer id assigned by the store on insert. Never reused.
pub type Id = i64;

// =============================================================================
// Entities
// =============================================================================

/// A genre tag. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
}

/// A director. Owns movies through `MovieSummary::director_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: Id,
    pub name: String,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
}

/// An actor. Linked to movies via the movie_actor association table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Id,
    pub name: String,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
}

/// Abbreviated movie projection used in list views.
///
/// Carries the scalar fields plus the director reference. Cast and genres
/// are only loaded by the detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: Id,
    pub title: String,
    pub release_year: i32,
    pub synopsis: Option<String>,
    /// Running time in minutes.
    pub duration: Option<i32>,
    pub director_id: Option<Id>,
    pub director: Option<Director>,
}

/// Full movie view with resolved cast and genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: Id,
    pub title: String,
    pub release_year: i32,
    pub synopsis: Option<String>,
    pub duration: Option<i32>,
    pub director_id: Option<Id>,
    pub director: Option<Director>,
    pub actors: Vec<Actor>,
    pub genres: Vec<Genre>,
}

impl MovieDetail {
    /// Assemble a detail view from a summary and its association sets.
    pub fn from_parts(summary: MovieSummary, actors: Vec<Actor>, genres: Vec<Genre>) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            release_year: summary.release_year,
            synopsis: summary.synopsis,
            duration: summary.duration,
            director_id: summary.director_id,
            director: summary.director,
            actors,
            genres,
        }
    }
}

/// A director together with the movies they directed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorWithMovies {
    pub director: Director,
    pub movies: Vec<MovieSummary>,
}

/// An actor together with the movies they appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorWithMovies {
    pub actor: Actor,
    pub movies: Vec<MovieSummary>,
}

// =============================================================================
// Creation inputs
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewGenre {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewDirector {
    pub name: String,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
}

/// Input for `MovieRepository::create`.
///
/// `actor_ids` and `genre_ids` are linked in the same transaction as the
/// movie row. Ids that do not resolve to an existing entity are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub director_id: Option<Id>,
    pub synopsis: Option<String>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub actor_ids: Vec<Id>,
    #[serde(default)]
    pub genre_ids: Vec<Id>,
}

// =============================================================================
// Query Types
// =============================================================================

/// Filters for listing actors. All present filters must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorQuery {
    /// Only actors cast in this movie.
    pub movie_id: Option<Id>,
    /// Only actors appearing in at least one movie carrying this genre.
    pub genre_id: Option<Id>,
}

/// Filters for listing movies. All present filters must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub genre_id: Option<Id>,
    pub director_id: Option<Id>,
    pub actor_id: Option<Id>,
    pub release_year: Option<i32>,
}

impl ActorQuery {
    pub fn is_empty(&self) -> bool {
        self.movie_id.is_none() && self.genre_id.is_none()
    }
}

impl MovieQuery {
    pub fn is_empty(&self) -> bool {
        self.genre_id.is_none()
            && self.director_id.is_none()
            && self.actor_id.is_none()
            && self.release_year.is_none()
    }
}
