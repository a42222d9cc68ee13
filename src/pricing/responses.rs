//! Response DTOs for the quotation API.

use serde::{Deserialize, Serialize};

/// Quote for a size tier priced from the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub price_min: i64,
    pub price_max: i64,
    pub price_average: i64,
    pub price_min_formatted: String,
    pub price_max_formatted: String,
    pub price_average_formatted: String,
    pub design_hours: String,
    pub session_hours: String,
    pub sensitive_zone: bool,
    pub wants_advisory: bool,
    pub idea_description: String,
    /// Always `false` here; the custom-quote tier short-circuits into
    /// [`CustomQuoteResponse`] before any price is computed.
    pub requires_custom_quote: bool,
}

/// Returned for the largest tier, which the studio prices by hand.
/// Carries no price or duration fields at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomQuoteResponse {
    pub requires_custom_quote: bool,
    pub message: String,
    pub idea_description: String,
}

/// Outcome of a quote computation, serialized as whichever shape applies.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuoteOutcome {
    Standard(QuoteResponse),
    CustomQuote(CustomQuoteResponse),
}
