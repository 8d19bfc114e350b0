//! Response DTOs and the HTTP error type
//!
//! - Success bodies are plain JSON objects (no envelope)
//! - Errors are `{"error": "<message>"}` via [`ApiError`]

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::gateway::services::{InventoryError, PriceError};

// ============================================================================
// Response DTOs
// ============================================================================

/// GET /health
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "middleware")]
    pub service: String,
}

/// POST /validate
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidateOrderResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Quantity cannot exceed 10 items")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Order validation successful")]
    pub message: Option<String>,
}

/// POST /calculate-price
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePriceResponse {
    #[schema(example = 54.0)]
    pub total_price: f64,
    #[schema(example = 10.0)]
    pub base_price: f64,
    #[schema(example = 6)]
    pub quantity: i64,
    /// First discount applied (off-peak or bulk); 0 when none
    #[schema(example = 0.1)]
    pub discount: f64,
    /// Rush-hour and surge multipliers; never includes the off-peak factor
    #[schema(example = 1.0)]
    pub price_multiplier: f64,
    #[schema(example = "Price calculated successfully")]
    pub message: String,
}

/// POST /check-inventory
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInventoryResponse {
    pub available: bool,
    /// Stock before this request's decrement
    #[schema(example = 250)]
    pub current_stock: i64,
    #[schema(example = 2)]
    pub requested_amount: i64,
    #[schema(example = "Inventory available")]
    pub message: String,
}

/// Error body for every 4xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid request body")]
    pub error: String,
}

// ============================================================================
// ApiError
// ============================================================================

/// Client-visible failure. Every variant is a 400; the service never
/// reports 5xx (store trouble degrades to a bypass response instead).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or fields of the wrong type
    #[error("Invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
