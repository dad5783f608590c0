//! Movie record types and the closed genre tag set.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Genre tags
// ---------------------------------------------------------------------------

/// The closed set of genre tags a movie may carry.
///
/// Input payloads must use the exact tag strings (`"Sci-Fi"` with the
/// hyphen); list filtering additionally accepts any casing via
/// [`Genre::from_filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    History,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

/// Every genre tag, in declaration order. Used to build validation messages.
pub const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::Adventure,
    Genre::Comedy,
    Genre::Crime,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
    Genre::History,
    Genre::Thriller,
    Genre::SciFi,
];

impl Genre {
    /// Return the canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::History => "History",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-Fi",
        }
    }

    /// Parse an exact tag string. Case-sensitive; this is what write
    /// payloads go through.
    pub fn from_str(s: &str) -> Option<Self> {
        ALL_GENRES.iter().copied().find(|g| g.as_str() == s)
    }

    /// Parse a `?genre=` filter value. Case-insensitive but still an exact
    /// match against one tag, never a substring.
    pub fn from_filter(s: &str) -> Option<Self> {
        ALL_GENRES
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One movie record as stored and as returned over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Server-generated, immutable, unique within the store.
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Runtime in minutes.
    pub duration: u32,
    /// Absolute URL of the poster image.
    pub poster: String,
    pub genre: Vec<Genre>,
    /// Rating in `[0, 10]`; defaults to 0 when absent on create.
    pub rate: f64,
}

impl Movie {
    /// Whether this movie carries the given genre filter tag
    /// (case-insensitive exact match).
    pub fn has_genre(&self, filter: &str) -> bool {
        match Genre::from_filter(filter) {
            Some(tag) => self.genre.contains(&tag),
            None => false,
        }
    }

    /// Merge the present fields of `patch` over this record, field by field.
    /// The id is never touched; absent patch fields leave the current value
    /// in place.
    pub fn apply_patch(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }
}

/// A fully validated create payload. Produced only by
/// [`crate::validation::validate_movie`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A validated partial-update payload. Every field is optional so that
/// "absent" stays distinguishable from any concrete value; present fields
/// have already passed the same per-field rules as a full create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when the payload carried no recognised field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
