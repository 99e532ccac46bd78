//! SQLite ActorRepository implementation.

use sqlx::SqlitePool;
use tracing::debug;

use super::helpers::{
    MOVIE_SUMMARY_SELECT, actor_from_row, database_error, movie_summary_from_row,
};
use crate::db::{
    Actor, ActorQuery, ActorRepository, ActorWithMovies, DbError, DbResult, Id, NewActor,
};

/// SQLx-backed actor repository.
pub struct SqliteActorRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Build the filtered actor listing.
///
/// Each filter adds its own join, in the order movie then genre, so a second
/// filter narrows the rows the first one already produced. The genre filter
/// walks actor -> movie_actor -> movie -> movie_genre and can match an actor
/// through several movies, hence DISTINCT.
fn build_list_sql(query: &ActorQuery) -> (String, Vec<Id>) {
    let mut joins: Vec<&str> = vec![];
    let mut conditions: Vec<&str> = vec![];
    let mut bind_values: Vec<Id> = vec![];

    if let Some(movie_id) = query.movie_id {
        joins.push("JOIN movie_actor ma_movie ON ma_movie.actor_id = a.id");
        conditions.push("ma_movie.movie_id = ?");
        bind_values.push(movie_id);
    }

    if let Some(genre_id) = query.genre_id {
        joins.push(
            "JOIN movie_actor ma_genre ON ma_genre.actor_id = a.id \
             JOIN movie m ON m.id = ma_genre.movie_id \
             JOIN movie_genre mg ON mg.movie_id = m.id",
        );
        conditions.push("mg.genre_id = ?");
        bind_values.push(genre_id);
    }

    let where_clause = if query.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT DISTINCT a.id, a.name, a.birth_year, a.bio FROM actor a {}{} ORDER BY a.id",
        joins.join(" "),
        where_clause
    );

    (sql, bind_values)
}

impl<'a> ActorRepository for SqliteActorRepository<'a> {
    async fn create(&self, actor: &NewActor) -> DbResult<Actor> {
        let result = sqlx::query("INSERT INTO actor (name, birth_year, bio) VALUES (?, ?, ?)")
            .bind(&actor.name)
            .bind(actor.birth_year)
            .bind(&actor.bio)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        let id = result.last_insert_rowid();
        debug!(id, name = %actor.name, "created actor");

        Ok(Actor {
            id,
            name: actor.name.clone(),
            birth_year: actor.birth_year,
            bio: actor.bio.clone(),
        })
    }

    async fn get(&self, id: Id) -> DbResult<Actor> {
        let row = sqlx::query("SELECT id, name, birth_year, bio FROM actor WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(database_error)?;

        row.map(|row| actor_from_row(&row))
            .ok_or_else(|| DbError::not_found("Actor", id))
    }

    async fn get_with_movies(&self, id: Id) -> DbResult<ActorWithMovies> {
        let actor = self.get(id).await?;

        let sql = format!(
            "{} JOIN movie_actor ma ON ma.movie_id = m.id WHERE ma.actor_id = ? ORDER BY m.id",
            MOVIE_SUMMARY_SELECT
        );
        let rows = sqlx::query(&sql)
            .bind(id)
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(ActorWithMovies {
            actor,
            movies: rows.iter().map(movie_summary_from_row).collect(),
        })
    }

    async fn list(&self, query: &ActorQuery) -> DbResult<Vec<Actor>> {
        let (sql, bind_values) = build_list_sql(query);

        let mut sql_query = sqlx::query(&sql);
        for value in &bind_values {
            sql_query = sql_query.bind(*value);
        }

        let rows = sql_query
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(actor_from_row).collect())
    }
}
