//! Price calculation handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::latency::{PRICE_DELAY_MS, simulate};
use super::super::state::AppState;
use super::super::types::{
    ApiResult, CalculatePriceRequest, CalculatePriceResponse, ErrorResponse, JsonBody,
};

/// Calculate the price of an order
///
/// POST /calculate-price
#[utoipa::path(
    post,
    path = "/calculate-price",
    request_body(content = CalculatePriceRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Price calculated", body = CalculatePriceResponse),
        (status = 400, description = "Malformed body or non-positive price/quantity", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn calculate_price(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CalculatePriceRequest>,
) -> ApiResult<CalculatePriceResponse> {
    simulate(&state, PRICE_DELAY_MS).await;
    Ok(Json(state.pricing.calculate(&req)?))
}
