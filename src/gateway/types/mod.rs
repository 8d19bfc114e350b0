//! Gateway types module
//!
//! ## Input Types
//! - [`ValidateOrderRequest`], [`CalculatePriceRequest`], [`CheckInventoryRequest`]
//! - [`JsonBody`]: JSON extractor that maps every decode failure to
//!   `400 {"error": "Invalid request body"}`
//!
//! ## Output Types
//! - Per-endpoint response DTOs
//! - [`ApiError`]: client error rendered as `{"error": ...}`
//!
//! ## Submodules
//! - [`extract`]: request body extraction
//! - [`order`]: request types
//! - [`response`]: response types and errors

pub mod extract;
pub mod order;
pub mod response;

pub use extract::JsonBody;
pub use order::{CalculatePriceRequest, CheckInventoryRequest, ValidateOrderRequest};
pub use response::{
    ApiError, ApiResult, CalculatePriceResponse, CheckInventoryResponse, ErrorResponse,
    HealthResponse, ValidateOrderResponse,
};
