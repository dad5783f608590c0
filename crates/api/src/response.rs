//! Shared response types for API handlers.
//!
//! Confirmation responses use a `{ "message": ... }` body. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` so the shape
//! stays consistent and type-checked.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
