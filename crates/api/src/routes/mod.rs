pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /movies            list (GET, ?genre= filter), create (POST)
/// /movies/{id}       get (GET), partial update (PATCH), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
