use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by an identifier that matched nothing. The id is kept as the
    /// raw string the caller supplied; ids are opaque and are not
    /// format-validated on lookup.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}
