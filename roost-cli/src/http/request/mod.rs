//! Typed requests against the API.
//!
//! Every request is a builder that resolves when awaited.

pub mod friends;
pub mod friendship;
