//! SQLite GenreRepository implementation.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{database_error, genre_from_row};
use crate::db::{DbError, DbResult, Genre, GenreRepository, Id, NewGenre};

/// SQLx-backed genre repository.
pub struct SqliteGenreRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> GenreRepository for SqliteGenreRepository<'a> {
    async fn create(&self, genre: &NewGenre) -> DbResult<Genre> {
        let result = sqlx::query("INSERT INTO genre (name, description) VALUES (?, ?)")
            .bind(&genre.name)
            .bind(&genre.description)
            .execute(self.pool)
            .await
            .map_err(|e| match database_error(e) {
                DbError::Constraint { .. } => DbError::Constraint {
                    message: format!("Genre with name '{}' already exists", genre.name),
                },
                other => other,
            })?;

        let id = result.last_insert_rowid();
        debug!(id, name = %genre.name, "created genre");

        Ok(Genre {
            id,
            name: genre.name.clone(),
            description: genre.description.clone(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<Genre> {
        let row = sqlx::query("SELECT id, name, description FROM genre WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(database_error)?;

        row.map(|row| genre_from_row(&row))
            .ok_or_else(|| DbError::not_found("Genre", id))
    }

    async fn list(&self) -> DbResult<Vec<Genre>> {
        let rows = sqlx::query("SELECT id, name, description FROM genre ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(genre_from_row).collect())
    }
}
