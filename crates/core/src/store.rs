//! In-memory movie collection.
//!
//! The store owns a plain `Vec<Movie>` and does nothing about concurrency
//! itself; the API layer wraps it in a single `RwLock` so every operation
//! runs to completion under one guard. All operations are linear scans over
//! a collection that is expected to stay small.

use uuid::Uuid;

use crate::movie::{Movie, MoviePatch, NewMovie};
use crate::types::MovieId;

/// Ordered, unindexed collection of movie records. Insertion order is
/// preserved for listing but carries no meaning.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records, optionally narrowed to those carrying the genre filter
    /// tag. The filter is a case-insensitive exact match against one of the
    /// enumerated tags; anything else matches nothing.
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            Some(filter) => self
                .movies
                .iter()
                .filter(|m| m.has_genre(filter))
                .cloned()
                .collect(),
            None => self.movies.clone(),
        }
    }

    /// Find a record by id.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Append a new record with a freshly generated id.
    ///
    /// The input has already passed full validation; the store's only job is
    /// id assignment and insertion at the end of the sequence.
    pub fn create(&mut self, new: NewMovie) -> Movie {
        let movie = Movie {
            id: Uuid::new_v4(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            genre: new.genre,
            rate: new.rate,
        };
        self.movies.push(movie.clone());
        movie
    }

    /// Merge a validated patch over the record with the given id, in place.
    /// Returns the merged record, or `None` when the id is absent.
    pub fn update(&mut self, id: MovieId, patch: MoviePatch) -> Option<Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        movie.apply_patch(patch);
        Some(movie.clone())
    }

    /// Remove the record with the given id. Returns `false` when absent, in
    /// which case the store is untouched.
    pub fn delete(&mut self, id: MovieId) -> bool {
        match self.movies.iter().position(|m| m.id == id) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
