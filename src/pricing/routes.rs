//! Quote endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::quote::{compute_quote, QuoteResult};
use super::requests::QuoteRequest;
use super::responses::{QuoteResponse, UnavailableResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

/// Check availability and price a stay.
///
/// Unavailable stays are a normal `200` answer; only malformed requests,
/// unknown properties and CMS failures are errors.
pub async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let stay = body.validate()?;

    let profile = state
        .cms
        .pricing_profile(&stay.property_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

    let response = match compute_quote(&profile, &stay) {
        QuoteResult::Available(quote) => {
            tracing::debug!(
                property_id = %stay.property_id,
                nights = quote.nights,
                total = %quote.total,
                "Quoted stay"
            );
            Json(QuoteResponse::from(&quote)).into_response()
        }
        QuoteResult::Unavailable(reason) => {
            tracing::debug!(
                property_id = %stay.property_id,
                reason = reason.code(),
                "Stay unavailable"
            );
            Json(UnavailableResponse::from(reason)).into_response()
        }
    };

    Ok(response)
}
