use std::sync::Arc;

use tokio::sync::RwLock;

use marquee_core::store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The movie collection behind a single writer lock. Reads take the
    /// shared guard, writes the exclusive one; each operation acquires the
    /// lock once and runs to completion under it.
    pub store: Arc<RwLock<MovieStore>>,
    /// Server configuration (the origin gate reads the allow-list from it).
    pub config: Arc<ServerConfig>,
}
