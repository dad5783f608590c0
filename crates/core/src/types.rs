/// Movie identifiers are server-generated UUID v4 values. Callers treat them
/// as opaque strings; only the store ever mints one.
pub type MovieId = uuid::Uuid;
