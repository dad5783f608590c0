//! Schema validation for movie payloads.
//!
//! Both entry points are pure functions over an untyped JSON value: payloads
//! are checked field by field so that a type mismatch surfaces as a
//! field-scoped message instead of a blanket deserialization failure. Full
//! validation requires every field and applies defaults; partial validation
//! accepts any subset but holds present fields to the same rules.

use std::fmt;

use chrono::Datelike;
use serde::Serialize;
use serde_json::Value;

use crate::movie::{Genre, MoviePatch, NewMovie, ALL_GENRES};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Lower bound of the rating scale.
pub const MIN_RATE: f64 = 0.0;

/// Upper bound of the rating scale.
pub const MAX_RATE: f64 = 10.0;

/// Rating applied when a create payload omits `rate`.
pub const DEFAULT_RATE: f64 = 0.0;

/// Latest accepted release year: the current calendar year.
fn max_year() -> i32 {
    chrono::Utc::now().year()
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field failure collected from one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a create payload.
///
/// Every schema field must be present and correct, except `rate` which
/// defaults to [`DEFAULT_RATE`]. Errors are collected across all fields
/// rather than stopping at the first failure. Unknown fields are ignored.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationErrors> {
    let obj = require_object(input)?;
    let mut errors = Vec::new();

    let title = collect(required(obj, "title").and_then(validate_title), &mut errors);
    let year = collect(required(obj, "year").and_then(validate_year), &mut errors);
    let director = collect(
        required(obj, "director").and_then(validate_director),
        &mut errors,
    );
    let duration = collect(
        required(obj, "duration").and_then(validate_duration),
        &mut errors,
    );
    let poster = collect(required(obj, "poster").and_then(validate_poster), &mut errors);
    let genre = collect(required(obj, "genre").and_then(validate_genre), &mut errors);
    let rate = match obj.get("rate") {
        Some(value) => collect(validate_rate(value), &mut errors),
        None => Some(DEFAULT_RATE),
    };

    match (title, year, director, duration, poster, genre, rate) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(poster),
            Some(genre),
            Some(rate),
        ) => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate a partial-update payload.
///
/// All fields are optional; any field that is present must satisfy the same
/// rule it would on create. The result carries only the fields that were
/// actually present, so a merge can distinguish "absent" from any value.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let obj = require_object(input)?;
    let mut errors = Vec::new();

    let patch = MoviePatch {
        title: present(obj, "title", validate_title, &mut errors),
        year: present(obj, "year", validate_year, &mut errors),
        director: present(obj, "director", validate_director, &mut errors),
        duration: present(obj, "duration", validate_duration, &mut errors),
        poster: present(obj, "poster", validate_poster, &mut errors),
        genre: present(obj, "genre", validate_genre, &mut errors),
        rate: present(obj, "rate", validate_rate, &mut errors),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(errors))
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn validate_title(value: &Value) -> Result<String, FieldError> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(FieldError::new("title", "title must be a non-empty string")),
    }
}

fn validate_year(value: &Value) -> Result<i32, FieldError> {
    let max = max_year();
    let out_of_range = || {
        FieldError::new(
            "year",
            format!("year must be an integer between {MIN_YEAR} and {max}"),
        )
    };

    // `as_i64` is None for floats, so fractional years are rejected here too.
    let year = value.as_i64().ok_or_else(out_of_range)?;
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    if year < MIN_YEAR || year > max {
        return Err(out_of_range());
    }
    Ok(year)
}

fn validate_director(value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FieldError::new("director", "director must be a string"))
}

fn validate_duration(value: &Value) -> Result<u32, FieldError> {
    let invalid = || FieldError::new("duration", "duration must be a positive integer");

    let minutes = value.as_u64().ok_or_else(invalid)?;
    if minutes == 0 {
        return Err(invalid());
    }
    u32::try_from(minutes).map_err(|_| invalid())
}

fn validate_poster(value: &Value) -> Result<String, FieldError> {
    match value.as_str() {
        Some(s) if is_absolute_url(s) => Ok(s.to_string()),
        _ => Err(FieldError::new(
            "poster",
            "poster must be a valid absolute URL",
        )),
    }
}

fn validate_genre(value: &Value) -> Result<Vec<Genre>, FieldError> {
    let arr = value.as_array().ok_or_else(|| {
        FieldError::new("genre", "genre must be a non-empty array of genre tags")
    })?;

    if arr.is_empty() {
        return Err(FieldError::new(
            "genre",
            "genre must be a non-empty array of genre tags",
        ));
    }

    let mut tags = Vec::with_capacity(arr.len());
    for item in arr {
        let tag = item
            .as_str()
            .and_then(Genre::from_str)
            .ok_or_else(|| {
                FieldError::new(
                    "genre",
                    format!(
                        "genre must only contain one of: {}",
                        ALL_GENRES
                            .iter()
                            .map(|g| g.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
            })?;
        tags.push(tag);
    }
    Ok(tags)
}

fn validate_rate(value: &Value) -> Result<f64, FieldError> {
    let invalid = || {
        FieldError::new(
            "rate",
            format!("rate must be a number between {MIN_RATE} and {MAX_RATE}"),
        )
    };

    let rate = value.as_f64().ok_or_else(invalid)?;
    if !rate.is_finite() || rate < MIN_RATE || rate > MAX_RATE {
        return Err(invalid());
    }
    Ok(rate)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_object(input: &Value) -> Result<&serde_json::Map<String, Value>, ValidationErrors> {
    input.as_object().ok_or_else(|| {
        ValidationErrors(vec![FieldError::new("body", "body must be a JSON object")])
    })
}

fn required<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, FieldError> {
    obj.get(field)
        .ok_or_else(|| FieldError::new(field, format!("{field} is required")))
}

/// Run a validator over a field only if it is present; record any failure.
fn present<T>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    validate: impl Fn(&Value) -> Result<T, FieldError>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    obj.get(field).and_then(|value| collect(validate(value), errors))
}

/// Push a failure onto `errors`, turning the result into an `Option`.
fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Accept only absolute `http`/`https` URLs with a non-empty host.
fn is_absolute_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"));

    match rest {
        Some(rest) => rest.split('/').next().is_some_and(|host| !host.is_empty()),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
