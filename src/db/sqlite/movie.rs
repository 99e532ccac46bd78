//! SQLite MovieRepository implementation.

use std::collections::HashSet;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

use super::helpers::{
    MOVIE_SUMMARY_SELECT, actor_from_row, database_error, distinct_ids, genre_from_row,
    movie_summary_from_row, placeholders,
};
use crate::db::{
    DbError, DbResult, Id, MovieDetail, MovieQuery, MovieRepository, MovieSummary, NewMovie,
};

/// SQLx-backed movie repository.
pub struct SqliteMovieRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// One of the two movie association tables.
#[derive(Debug, Clone, Copy)]
enum Link {
    Actors,
    Genres,
}

impl Link {
    fn table(self) -> &'static str {
        match self {
            Link::Actors => "movie_actor",
            Link::Genres => "movie_genre",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Link::Actors => "actor_id",
            Link::Genres => "genre_id",
        }
    }

    fn entity_table(self) -> &'static str {
        match self {
            Link::Actors => "actor",
            Link::Genres => "genre",
        }
    }

    fn entity_name(self) -> &'static str {
        match self {
            Link::Actors => "Actor",
            Link::Genres => "Genre",
        }
    }
}

/// Insert association rows for the ids in `ids` that exist.
///
/// The ids are equi-joined against the entity table, so unknown ids never
/// reach the association table. Pairs that already exist are left alone.
/// Returns the number of rows written.
async fn link_existing(
    conn: &mut SqliteConnection,
    link: Link,
    movie_id: Id,
    ids: &[Id],
) -> DbResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "INSERT OR IGNORE INTO {} (movie_id, {}) SELECT ?, id FROM {} WHERE id IN ({})",
        link.table(),
        link.column(),
        link.entity_table(),
        placeholders(ids.len())
    );

    let mut query = sqlx::query(&sql).bind(movie_id);
    for id in ids {
        query = query.bind(*id);
    }

    let result = query.execute(conn).await.map_err(database_error)?;
    Ok(result.rows_affected())
}

/// Return the first id in `ids` with no row in the entity table.
async fn first_missing(
    conn: &mut SqliteConnection,
    link: Link,
    ids: &[Id],
) -> DbResult<Option<Id>> {
    if ids.is_empty() {
        return Ok(None);
    }

    let sql = format!(
        "SELECT id FROM {} WHERE id IN ({})",
        link.entity_table(),
        placeholders(ids.len())
    );

    let mut query = sqlx::query_scalar::<_, Id>(&sql);
    for id in ids {
        query = query.bind(*id);
    }

    let existing: HashSet<Id> = query
        .fetch_all(conn)
        .await
        .map_err(database_error)?
        .into_iter()
        .collect();

    Ok(ids.iter().copied().find(|id| !existing.contains(id)))
}

async fn exists(conn: &mut SqliteConnection, table: &str, id: Id) -> DbResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", table);
    sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(database_error)
}

/// Build the filtered movie listing.
///
/// Filters are applied in declaration order: genre, director, actor,
/// release year. Association joins are keyed on a single id and the pairs
/// are unique, so no movie row can repeat.
fn build_list_sql(query: &MovieQuery) -> (String, Vec<i64>) {
    let mut joins: Vec<&str> = vec![];
    let mut conditions: Vec<&str> = vec![];
    let mut bind_values: Vec<i64> = vec![];

    if let Some(genre_id) = query.genre_id {
        joins.push("JOIN movie_genre mg ON mg.movie_id = m.id");
        conditions.push("mg.genre_id = ?");
        bind_values.push(genre_id);
    }

    if let Some(director_id) = query.director_id {
        conditions.push("m.director_id = ?");
        bind_values.push(director_id);
    }

    if let Some(actor_id) = query.actor_id {
        joins.push("JOIN movie_actor ma ON ma.movie_id = m.id");
        conditions.push("ma.actor_id = ?");
        bind_values.push(actor_id);
    }

    if let Some(release_year) = query.release_year {
        conditions.push("m.release_year = ?");
        bind_values.push(i64::from(release_year));
    }

    let mut sql = MOVIE_SUMMARY_SELECT.to_string();
    for join in &joins {
        sql.push(' ');
        sql.push_str(join);
    }
    if !query.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY m.id");

    (sql, bind_values)
}

impl<'a> MovieRepository for SqliteMovieRepository<'a> {
    async fn create(&self, movie: &NewMovie) -> DbResult<MovieDetail> {
        // Start a transaction for atomic operations
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        if let Some(director_id) = movie.director_id
            && !exists(&mut *tx, "director", director_id).await?
        {
            return Err(DbError::reference("Director", director_id));
        }

        let result = sqlx::query(
            "INSERT INTO movie (title, release_year, synopsis, duration, director_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&movie.title)
        .bind(movie.release_year)
        .bind(&movie.synopsis)
        .bind(movie.duration)
        .bind(movie.director_id)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        let id = result.last_insert_rowid();

        for (link, requested) in [
            (Link::Actors, distinct_ids(&movie.actor_ids)),
            (Link::Genres, distinct_ids(&movie.genre_ids)),
        ] {
            let linked = link_existing(&mut *tx, link, id, &requested).await?;
            let dropped = requested.len() as u64 - linked;
            if dropped > 0 {
                warn!(
                    movie_id = id,
                    dropped,
                    table = link.table(),
                    "ignored ids that do not exist"
                );
            }
        }

        tx.commit().await.map_err(database_error)?;
        debug!(id, title = %movie.title, "created movie");

        self.get_detail(id).await
    }

    async fn get_summary(&self, id: Id) -> DbResult<MovieSummary> {
        let sql = format!("{} WHERE m.id = ?", MOVIE_SUMMARY_SELECT);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(database_error)?;

        row.map(|row| movie_summary_from_row(&row))
            .ok_or_else(|| DbError::not_found("Movie", id))
    }

    async fn get_detail(&self, id: Id) -> DbResult<MovieDetail> {
        let summary = self.get_summary(id).await?;

        let actor_rows = sqlx::query(
            "SELECT a.id, a.name, a.birth_year, a.bio FROM actor a \
             JOIN movie_actor ma ON ma.actor_id = a.id WHERE ma.movie_id = ? ORDER BY a.id",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await
        .map_err(database_error)?;

        let genre_rows = sqlx::query(
            "SELECT g.id, g.name, g.description FROM genre g \
             JOIN movie_genre mg ON mg.genre_id = g.id WHERE mg.movie_id = ? ORDER BY g.id",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await
        .map_err(database_error)?;

        Ok(MovieDetail::from_parts(
            summary,
            actor_rows.iter().map(actor_from_row).collect(),
            genre_rows.iter().map(genre_from_row).collect(),
        ))
    }

    async fn list(&self, query: &MovieQuery) -> DbResult<Vec<MovieSummary>> {
        let (sql, bind_values) = build_list_sql(query);

        let mut sql_query = sqlx::query(&sql);
        for value in &bind_values {
            sql_query = sql_query.bind(*value);
        }

        let rows = sql_query
            .fetch_all(self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(movie_summary_from_row).collect())
    }

    async fn associate_actors(&self, movie_id: Id, actor_ids: &[Id]) -> DbResult<()> {
        self.associate_strict(Link::Actors, movie_id, actor_ids).await
    }

    async fn associate_genres(&self, movie_id: Id, genre_ids: &[Id]) -> DbResult<()> {
        self.associate_strict(Link::Genres, movie_id, genre_ids).await
    }
}

impl<'a> SqliteMovieRepository<'a> {
    async fn associate_strict(&self, link: Link, movie_id: Id, ids: &[Id]) -> DbResult<()> {
        let ids = distinct_ids(ids);
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        if !exists(&mut *tx, "movie", movie_id).await? {
            return Err(DbError::reference("Movie", movie_id));
        }

        if let Some(missing) = first_missing(&mut *tx, link, &ids).await? {
            return Err(DbError::reference(link.entity_name(), missing));
        }

        link_existing(&mut *tx, link, movie_id, &ids).await?;

        tx.commit().await.map_err(database_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_compose_in_declaration_order() {
        let query = MovieQuery {
            genre_id: Some(1),
            director_id: Some(2),
            actor_id: Some(3),
            release_year: Some(2010),
        };
        let (sql, binds) = build_list_sql(&query);

        assert_eq!(binds, vec![1, 2, 3, 2010]);
        assert!(sql.contains(
            "WHERE mg.genre_id = ? AND m.director_id = ? AND ma.actor_id = ? AND m.release_year = ?"
        ));
        assert!(sql.ends_with("ORDER BY m.id"));
    }

    #[test]
    fn test_empty_query_has_no_where_clause() {
        let (sql, binds) = build_list_sql(&MovieQuery::default());

        assert!(binds.is_empty());
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY m.id"));
    }

    #[test]
    fn test_scalar_filters_add_no_joins() {
        let query = MovieQuery {
            director_id: Some(2),
            release_year: Some(1994),
            ..Default::default()
        };
        let (sql, _) = build_list_sql(&query);

        assert!(!sql.contains("movie_genre"));
        assert!(!sql.contains("movie_actor"));
    }
}
