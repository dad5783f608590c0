//! Request origin gate.
//!
//! The CORS layer emits the response headers browsers need, but it never
//! blocks a request on its own. This middleware is the enforcement half:
//! any request carrying an `Origin` header outside the configured
//! allow-list is rejected with 403 before it reaches a handler.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Allow requests whose `Origin` header is absent (non-browser or
/// same-origin callers) or exactly equal to an allow-list entry. No
/// wildcard or prefix matching.
pub async fn origin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        // A non-UTF-8 origin can never equal an allow-list entry.
        let origin = origin.to_str().unwrap_or_default();
        if !state.config.cors_origins.iter().any(|o| o == origin) {
            tracing::warn!(%origin, "rejected request from disallowed origin");
            return Err(AppError::OriginRejected(origin.to_string()));
        }
    }

    Ok(next.run(request).await)
}
