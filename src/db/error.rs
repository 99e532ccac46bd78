//! Database error types.
//!
//! Storage-backend agnostic errors for the catalog repositories. Uses miette
//! for diagnostic output and thiserror for the derive.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(movie_catalog::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(movie_catalog::db::constraint))]
    Constraint { message: String },

    #[error("Referenced {entity_type} with id '{id}' does not exist")]
    #[diagnostic(
        code(movie_catalog::db::reference),
        help("create the referenced entity before linking to it")
    )]
    Reference { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(movie_catalog::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(movie_catalog::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(movie_catalog::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    pub(crate) fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn reference(entity_type: &str, id: impl ToString) -> Self {
        Self::Reference {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
