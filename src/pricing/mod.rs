//! Stay pricing engine.
//!
//! Turns a property's pricing profile and a requested stay into either an
//! itemized quote or the reason the stay cannot be booked.

pub mod calculators;
pub mod quote;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use quote::{compute_quote, Quote, QuoteBreakdown, QuoteResult, StayRequest, Unavailability};
pub use routes::router;
