//! SQLite DirectorRepository implementation.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{
    MOVIE_SUMMARY_SELECT, database_error, director_from_row, movie_summary_from_row,
};
use crate::db::{
    DbError, DbResult, Director, DirectorRepository, DirectorWithMovies, Id, NewDirector,
};

/// SQLx-backed director repository.
pub struct SqliteDirectorRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> DirectorRepository for SqliteDirectorRepository<'a> {
    async fn create(&self, director: &NewDirector) -> DbResult<Director> {
        let result = sqlx::query("INSERT INTO director (name, birth_year, bio) VALUES (?, ?, ?)")
            .bind(&director.name)
            .bind(director.birth_year)
            .bind(&director.bio)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        let id = result.last_insert_rowid();
        debug!(id, name = %director.name, "created director");

        Ok(Director {
            id,
            name: director.name.clone(),
            birth_year: director.birth_year,
            bio: director.bio.clone(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<Director> {
        let row = sqlx::query("SELECT id, name, birth_year, bio FROM director WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(database_error)?;

        row.map(|row| director_from_row(&row))
            .ok_or_else(|| DbError::not_found("Director", id))
    }

    async fn get_with_movies(&self, id: Id) -> DbResult<DirectorWithMovies> {
        let director = self.get(id).await?;

        let sql = format!("{} WHERE m.director_id = ? ORDER BY m.id", MOVIE_SUMMARY_SELECT);
        let rows = sqlx::query(&sql)
            .bind(id)
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(DirectorWithMovies {
            director,
            movies: rows.iter().map(movie_summary_from_row).collect(),
        })
    }

    async fn list(&self) -> DbResult<Vec<Director>> {
        let rows = sqlx::query("SELECT id, name, birth_year, bio FROM director ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(director_from_row).collect())
    }
}
