//! Quotation engine for the It's Real studio.
//!
//! Maps a tattoo size code to a price range in Colombian pesos, applies the
//! sensitive-zone and advisory adjustments, and produces the JSON payloads
//! served by the `/cotizar` endpoint.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tables;

// Re-export commonly used items
pub use calculators::{format_cop, round_cop};
pub use routes::router;
pub use services::{compute_quote, QuoteError};
