//! Data transfer objects shared across the HTTP boundary.
//!
//! Every type here is serialized as JSON and documented in the OpenAPI schema. Identifiers
//! arriving in request bodies are plain strings so malformed UUIDs can be rejected with a
//! `400 Bad Request` by the controllers instead of a deserialization failure.

pub mod activity;
pub mod api;
pub mod catalog;
pub mod certification;
pub mod payment;
pub mod rating;
pub mod reservation;
pub mod resource;
pub mod trip;
pub mod user;
