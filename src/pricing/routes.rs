//! Quotation route handlers

use axum::extract::rejection::JsonRejection;
use axum::{routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteOutcome;
use super::services;

/// Build the quotation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/cotizar", post(cotizar))
}

/// Quotation endpoint handler
pub async fn cotizar(
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteOutcome>> {
    let Json(request) = payload?;
    tracing::debug!("Quote requested for size code {:?}", request.size_code);

    let outcome = services::compute_quote(&request)?;
    Ok(Json(outcome))
}
