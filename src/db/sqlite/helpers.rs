//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{Actor, DbError, Director, Genre, MovieSummary};

/// Columns and joins for a movie summary. The director is resolved with a
/// LEFT JOIN so movies without one still appear.
pub const MOVIE_SUMMARY_SELECT: &str = "SELECT m.id, m.title, m.release_year, m.synopsis, \
     m.duration, m.director_id, d.name AS director_name, d.birth_year AS director_birth_year, \
     d.bio AS director_bio \
     FROM movie m LEFT JOIN director d ON d.id = m.director_id";

/// Map a driver error to the storage-agnostic error type.
///
/// Unique and foreign key violations become `DbError::Constraint`,
/// everything else `DbError::Database`.
pub fn database_error(e: sqlx::Error) -> DbError {
    if let Some(db_err) = e.as_database_error()
        && (db_err.is_unique_violation() || db_err.is_foreign_key_violation())
    {
        return DbError::Constraint {
            message: db_err.message().to_string(),
        };
    }
    DbError::Database {
        message: e.to_string(),
    }
}

/// Build `?, ?, ?` for an IN clause with `count` values.
pub fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Sort and deduplicate ids so each is bound once.
pub fn distinct_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

pub fn genre_from_row(row: &SqliteRow) -> Genre {
    Genre {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}

pub fn director_from_row(row: &SqliteRow) -> Director {
    Director {
        id: row.get("id"),
        name: row.get("name"),
        birth_year: row.get("birth_year"),
        bio: row.get("bio"),
    }
}

pub fn actor_from_row(row: &SqliteRow) -> Actor {
    Actor {
        id: row.get("id"),
        name: row.get("name"),
        birth_year: row.get("birth_year"),
        bio: row.get("bio"),
    }
}

/// Map a row produced by `MOVIE_SUMMARY_SELECT`.
pub fn movie_summary_from_row(row: &SqliteRow) -> MovieSummary {
    let director_id: Option<i64> = row.get("director_id");
    let director_name: Option<String> = row.get("director_name");

    let director = match (director_id, director_name) {
        (Some(id), Some(name)) => Some(Director {
            id,
            name,
            birth_year: row.get("director_birth_year"),
            bio: row.get("director_bio"),
        }),
        _ => None,
    };

    MovieSummary {
        id: row.get("id"),
        title: row.get("title"),
        release_year: row.get("release_year"),
        synopsis: row.get("synopsis"),
        duration: row.get("duration"),
        director_id,
        director,
    }
}
