//! HTTP API for the movie catalog.

mod handlers;
pub mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr};

use axum::http::HeaderValue;
use miette::Diagnostic;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

use crate::db::Database;

/// Environment variable holding comma-separated allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "MOVIE_CATALOG_CORS_ORIGINS";

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}: {source}")]
    #[diagnostic(code(movie_catalog::api::bind), help("is another process using the port?"))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(movie_catalog::api::serve))]
    Serve(#[source] std::io::Error),

    #[error("Invalid CORS origin: {origin}")]
    #[diagnostic(code(movie_catalog::api::cors))]
    InvalidOrigin { origin: String },
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Config {
    /// Defaults, with allowed origins taken from `MOVIE_CATALOG_CORS_ORIGINS`
    /// when set.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(CORS_ORIGINS_ENV) {
            let origins = parse_origins(&raw);
            if !origins.is_empty() {
                config.allowed_origins = origins;
            }
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the allowed origins (takes precedence over the env var).
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the CORS layer for the configured origins.
///
/// Methods and headers mirror the request, since wildcards cannot be combined
/// with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ApiError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ApiError::InvalidOrigin {
                origin: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    // A subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and database
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let app = routes::create_router(AppState::new(db))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
