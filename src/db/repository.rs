//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Every
//! method returns a `Send` future so handlers generic over `Database` can be
//! served by axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{
        Actor, ActorQuery, ActorWithMovies, Director, DirectorWithMovies, Genre, Id, MovieDetail,
        MovieQuery, MovieSummary, NewActor, NewDirector, NewGenre, NewMovie,
    },
};

/// Repository for Genre operations.
pub trait GenreRepository {
    /// Create a genre. Fails with `DbError::Constraint` if the name is taken.
    fn create(&self, genre: &NewGenre) -> impl Future<Output = DbResult<Genre>> + Send;

    /// Get a genre by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Genre>> + Send;

    /// Get all genres in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Genre>>> + Send;
}

/// Repository for Director operations.
pub trait DirectorRepository {
    /// Create a director.
    fn create(&self, director: &NewDirector) -> impl Future<Output = DbResult<Director>> + Send;

    /// Get a director by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Director>> + Send;

    /// Get a director together with the movies they directed.
    fn get_with_movies(
        &self,
        id: Id,
    ) -> impl Future<Output = DbResult<DirectorWithMovies>> + Send;

    /// Get all directors in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Director>>> + Send;
}

/// Repository for Actor operations.
pub trait ActorRepository {
    /// Create an actor.
    fn create(&self, actor: &NewActor) -> impl Future<Output = DbResult<Actor>> + Send;

    /// Get an actor by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Actor>> + Send;

    /// Get an actor together with the movies they appear in.
    fn get_with_movies(&self, id: Id) -> impl Future<Output = DbResult<ActorWithMovies>> + Send;

    /// List actors matching every filter set in `query`, distinct by id.
    fn list(&self, query: &ActorQuery) -> impl Future<Output = DbResult<Vec<Actor>>> + Send;
}

/// Repository for Movie operations.
pub trait MovieRepository {
    /// Create a movie and link its cast and genres in one transaction.
    ///
    /// Fails with `DbError::Reference` if `director_id` is set but unknown.
    /// Unknown actor or genre ids are dropped without error.
    fn create(&self, movie: &NewMovie) -> impl Future<Output = DbResult<MovieDetail>> + Send;

    /// Summary fetch: scalar fields and director only.
    fn get_summary(&self, id: Id) -> impl Future<Output = DbResult<MovieSummary>> + Send;

    /// Detail fetch: summary plus the full actor and genre lists.
    fn get_detail(&self, id: Id) -> impl Future<Output = DbResult<MovieDetail>> + Send;

    /// List movie summaries matching every filter set in `query`.
    fn list(&self, query: &MovieQuery)
    -> impl Future<Output = DbResult<Vec<MovieSummary>>> + Send;

    /// Link existing actors to an existing movie.
    ///
    /// Fails with `DbError::Reference` if the movie or any actor is missing,
    /// in which case nothing is written.
    fn associate_actors(
        &self,
        movie_id: Id,
        actor_ids: &[Id],
    ) -> impl Future<Output = DbResult<()>> + Send;

    /// Link existing genres to an existing movie. Same contract as
    /// `associate_actors`.
    fn associate_genres(
        &self,
        movie_id: Id,
        genre_ids: &[Id],
    ) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic
/// dispatch.
pub trait Database: Send + Sync {
    type Genres<'a>: GenreRepository + Send + Sync
    where
        Self: 'a;
    type Directors<'a>: DirectorRepository + Send + Sync
    where
        Self: 'a;
    type Actors<'a>: ActorRepository + Send + Sync
    where
        Self: 'a;
    type Movies<'a>: MovieRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the genre repository.
    fn genres(&self) -> Self::Genres<'_>;

    /// Get the director repository.
    fn directors(&self) -> Self::Directors<'_>;

    /// Get the actor repository.
    fn actors(&self) -> Self::Actors<'_>;

    /// Get the movie repository.
    fn movies(&self) -> Self::Movies<'_>;
}
