//! Handlers for the `/movies` resource.
//!
//! Write payloads arrive as untyped JSON and go through the core validators,
//! so a type mismatch comes back as a field-scoped 400 instead of an axum
//! deserialization rejection. Path ids are opaque strings: anything that
//! does not match a stored id -- including strings that are not UUIDs at
//! all -- reports 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use marquee_core::error::CoreError;
use marquee_core::movie::Movie;
use marquee_core::types::MovieId;
use marquee_core::validation::{validate_movie, validate_partial_movie};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct ListMoviesParams {
    /// Optional genre tag. Matched case-insensitively against the
    /// enumerated tags, never as a substring.
    pub genre: Option<String>,
}

/// GET /movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let store = state.store.read().await;
    Ok(Json(store.list(params.genre.as_deref())))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let parsed = parse_id(&id)?;
    let store = state.store.read().await;
    let movie = store.get(parsed).cloned().ok_or_else(|| not_found(&id))?;
    Ok(Json(movie))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let new = validate_movie(&body).map_err(CoreError::Validation)?;

    let movie = state.store.write().await.create(new);
    tracing::debug!(id = %movie.id, title = %movie.title, "created movie");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Movie>> {
    // The body is validated before the id lookup: an invalid payload
    // against a missing id reports 400, not 404.
    let patch = validate_partial_movie(&body).map_err(CoreError::Validation)?;

    let parsed = parse_id(&id)?;
    let mut store = state.store.write().await;
    let movie = store.update(parsed, patch).ok_or_else(|| not_found(&id))?;

    tracing::debug!(id = %movie.id, "updated movie");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let parsed = parse_id(&id)?;

    if state.store.write().await.delete(parsed) {
        tracing::debug!(%id, "deleted movie");
        Ok(Json(MessageResponse::new("Movie deleted")))
    } else {
        Err(not_found(&id))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Parse a path id. A string that is not a UUID cannot match any stored
/// record, so it is reported as not-found rather than as a format error.
fn parse_id(raw: &str) -> Result<MovieId, AppError> {
    MovieId::parse_str(raw).map_err(|_| not_found(raw))
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: id.to_string(),
    })
}
