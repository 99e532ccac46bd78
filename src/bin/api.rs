//! Movie catalog API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use movie_catalog::api::{self, ApiError, Config};
use movie_catalog::db::{Database, DbError, SqliteDatabase};
use movie_catalog::paths::get_db_path;
use movie_catalog::seed::{SeedOutcome, seed_database};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(movie_catalog::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(movie_catalog::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(movie_catalog::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "movie-catalog-api")]
#[command(author, version, about = "Movie catalog API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Database file path (defaults to XDG data directory: ~/.local/share/movie-catalog/catalog.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; overrides MOVIE_CATALOG_CORS_ORIGINS)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,

    /// Load the sample catalog into an empty database before serving
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    // Create the concrete database implementation
    let db_path = cli.db.unwrap_or_else(get_db_path);
    info!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    if cli.seed {
        match seed_database(&db).await {
            Ok(SeedOutcome::AlreadySeeded) => info!("Seed skipped, catalog not empty"),
            Ok(SeedOutcome::Seeded { movies, .. }) => info!(movies, "Seeded sample catalog"),
            Err(e) => warn!(error = %e, "Seeding failed, starting with existing data"),
        }
    }

    let mut config = Config::new().with_host(cli.host).with_port(cli.port);
    if !cli.cors_origins.is_empty() {
        config = config.with_allowed_origins(cli.cors_origins);
    }

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
