//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod actor;
mod connection;
mod director;
mod genre;
mod helpers;
mod movie;

#[cfg(test)]
mod director_test;

pub use actor::SqliteActorRepository;
pub use connection::SqliteDatabase;
pub use director::SqliteDirectorRepository;
pub use genre::SqliteGenreRepository;
pub use movie::SqliteMovieRepository;
