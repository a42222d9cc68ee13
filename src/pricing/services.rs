//! Quote computation service.
//!
//! Validates the request against the price table, runs the adjustment
//! pipeline and assembles the response DTOs. Stateless - every request is
//! priced independently.

use crate::error::AppError;

use super::calculators::{apply_surcharge, format_cop, midpoint};
use super::requests::QuoteRequest;
use super::responses::{CustomQuoteResponse, QuoteOutcome, QuoteResponse};
use super::tables::{self, ADVISORY_FEE, CUSTOM_QUOTE_MESSAGE, SENSITIVE_ZONE_FACTOR};

/// Validation failures for a quote request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("El código de tamaño es obligatorio")]
    MissingSizeCode,

    #[error("Código de tamaño no reconocido: {0}")]
    UnknownSizeCode(u8),
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

/// Compute a quote for the request.
///
/// Recognized non-sentinel sizes go through the full pipeline: zone
/// surcharge, advisory fee, midpoint, formatting. The custom-quote tier
/// short-circuits before any arithmetic runs.
pub fn compute_quote(request: &QuoteRequest) -> Result<QuoteOutcome, QuoteError> {
    let size_code = request.size_code.ok_or(QuoteError::MissingSizeCode)?;
    let range = tables::price_range(size_code).ok_or(QuoteError::UnknownSizeCode(size_code))?;

    if range.is_custom_quote() {
        return Ok(QuoteOutcome::CustomQuote(CustomQuoteResponse {
            requires_custom_quote: true,
            message: CUSTOM_QUOTE_MESSAGE.to_string(),
            idea_description: request.idea_description.clone(),
        }));
    }

    let mut min = range.min;
    let mut max = range.max;

    if request.sensitive_zone {
        min = apply_surcharge(min, SENSITIVE_ZONE_FACTOR);
        max = apply_surcharge(max, SENSITIVE_ZONE_FACTOR);
    }

    // Flat fee lands after the percentage step so the two never compound.
    if request.wants_advisory {
        min += ADVISORY_FEE;
        max += ADVISORY_FEE;
    }

    let average = midpoint(min, max);

    Ok(QuoteOutcome::Standard(QuoteResponse {
        price_min: min,
        price_max: max,
        price_average: average,
        price_min_formatted: format_cop(min),
        price_max_formatted: format_cop(max),
        price_average_formatted: format_cop(average),
        design_hours: tables::design_hours(size_code).unwrap_or_default().to_string(),
        session_hours: tables::session_hours(size_code).unwrap_or_default().to_string(),
        sensitive_zone: request.sensitive_zone,
        wants_advisory: request.wants_advisory,
        idea_description: request.idea_description.clone(),
        requires_custom_quote: false,
    }))
}
