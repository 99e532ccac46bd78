//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ActorResponse, ActorWithMoviesResponse, CreateActorRequest, CreateDirectorRequest,
    CreateGenreRequest, CreateMovieRequest, DirectorResponse, DirectorWithMoviesResponse,
    ErrorResponse, GenreResponse, HealthResponse, MovieResponse, MovieSummaryResponse,
    RootResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
/// Collection paths are registered with and without the trailing slash.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Catalog API",
        version = "1.0.0",
        description = "Catalog of movies, actors, directors and genres with relational filtering",
        license(name = "MIT")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_genres,
        handlers::get_genre,
        handlers::create_genre,
        handlers::list_directors,
        handlers::get_director,
        handlers::create_director,
        handlers::list_actors,
        handlers::get_actor,
        handlers::create_actor,
        handlers::list_movies,
        handlers::get_movie,
        handlers::create_movie,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            GenreResponse,
            CreateGenreRequest,
            DirectorResponse,
            DirectorWithMoviesResponse,
            CreateDirectorRequest,
            ActorResponse,
            ActorWithMoviesResponse,
            CreateActorRequest,
            MovieSummaryResponse,
            MovieResponse,
            CreateMovieRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "genres", description = "Genre endpoints"),
        (name = "directors", description = "Director endpoints"),
        (name = "actors", description = "Actor endpoints"),
        (name = "movies", description = "Movie endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let genre_routes = routes!(D => {
        get "/api/genres" => handlers::list_genres,
        get "/api/genres/" => handlers::list_genres,
        post "/api/genres" => handlers::create_genre,
        post "/api/genres/" => handlers::create_genre,
        get "/api/genres/{id}" => handlers::get_genre,
    });

    let director_routes = routes!(D => {
        get "/api/directors" => handlers::list_directors,
        get "/api/directors/" => handlers::list_directors,
        post "/api/directors" => handlers::create_director,
        post "/api/directors/" => handlers::create_director,
        get "/api/directors/{id}" => handlers::get_director,
    });

    let actor_routes = routes!(D => {
        get "/api/actors" => handlers::list_actors,
        get "/api/actors/" => handlers::list_actors,
        post "/api/actors" => handlers::create_actor,
        post "/api/actors/" => handlers::create_actor,
        get "/api/actors/{id}" => handlers::get_actor,
    });

    let movie_routes = routes!(D => {
        get "/api/movies" => handlers::list_movies,
        get "/api/movies/" => handlers::list_movies,
        post "/api/movies" => handlers::create_movie,
        post "/api/movies/" => handlers::create_movie,
        get "/api/movies/{id}" => handlers::get_movie,
    });

    system_routes
        .merge(genre_routes)
        .merge(director_routes)
        .merge(actor_routes)
        .merge(movie_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
