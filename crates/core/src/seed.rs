//! The fixed seed collection loaded once at process start.
//!
//! The records ship embedded in the binary; mutations only ever touch the
//! in-memory copy and are lost on restart.

use crate::error::CoreError;
use crate::movie::Movie;
use crate::store::MovieStore;

const SEED_JSON: &str = include_str!("../data/movies.json");

/// Parse the embedded seed records.
pub fn seed_movies() -> Result<Vec<Movie>, CoreError> {
    serde_json::from_str(SEED_JSON)
        .map_err(|e| CoreError::Internal(format!("seed collection is malformed: {e}")))
}

/// Build a store pre-populated with the seed collection.
pub fn seed_store() -> Result<MovieStore, CoreError> {
    Ok(MovieStore::with_movies(seed_movies()?))
}
