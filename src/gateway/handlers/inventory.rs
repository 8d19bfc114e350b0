//! Inventory check handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::latency::{INVENTORY_DELAY_MS, simulate};
use super::super::state::AppState;
use super::super::types::{
    ApiResult, CheckInventoryRequest, CheckInventoryResponse, ErrorResponse, JsonBody,
};

/// Check stock for an item and reserve the requested quantity
///
/// POST /check-inventory
///
/// When the store is unreachable the check is bypassed and reported as
/// available (`currentStock: 999`).
#[utoipa::path(
    post,
    path = "/check-inventory",
    request_body(content = CheckInventoryRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Availability (pre-decrement stock)", body = CheckInventoryResponse),
        (status = 400, description = "Malformed body, missing item ID or non-positive quantity", body = ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn check_inventory(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CheckInventoryRequest>,
) -> ApiResult<CheckInventoryResponse> {
    simulate(&state, INVENTORY_DELAY_MS).await;
    Ok(Json(state.inventory.check(&req).await?))
}
