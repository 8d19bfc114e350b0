//! Order validation handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::latency::{VALIDATE_DELAY_MS, simulate};
use super::super::state::AppState;
use super::super::types::{
    ApiResult, ErrorResponse, JsonBody, ValidateOrderRequest, ValidateOrderResponse,
};

/// Validate an order
///
/// POST /validate
///
/// Always 200 for a well-formed body; rule violations come back as
/// `valid: false` with the reason in `error`.
#[utoipa::path(
    post,
    path = "/validate",
    request_body(content = ValidateOrderRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Validation outcome", body = ValidateOrderResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn validate_order(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ValidateOrderRequest>,
) -> ApiResult<ValidateOrderResponse> {
    simulate(&state, VALIDATE_DELAY_MS).await;
    Ok(Json(state.validator.validate(&req)))
}
