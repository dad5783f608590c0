//! Domain layer for the marquee movie catalog.
//!
//! Holds the movie record types, the schema validators, the in-memory store,
//! and the seed collection. This crate is HTTP-free; the `marquee-api` crate
//! owns the transport surface.

pub mod error;
pub mod movie;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;
