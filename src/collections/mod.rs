//! Shareable property collections.
//!
//! A collection is a curated list of properties an agent sends to a client.
//! It may expire and may be protected by an access code.

pub mod gate;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod sharing;

pub use gate::{evaluate_access, CollectionAccess, GrantedCollection};
pub use routes::router;
