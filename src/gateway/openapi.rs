//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3002/docs`
//! - OpenAPI JSON: `http://localhost:3002/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    CalculatePriceRequest, CalculatePriceResponse, CheckInventoryRequest, CheckInventoryResponse,
    ErrorResponse, HealthResponse, ValidateOrderRequest, ValidateOrderResponse,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Middleware API",
        version = "1.0.0",
        description = "Order validation, dynamic pricing and inventory checks for the demo order flow.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3002", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::validate_order,
        crate::gateway::handlers::pricing::calculate_price,
        crate::gateway::handlers::inventory::check_inventory,
    ),
    components(
        schemas(
            HealthResponse,
            ValidateOrderRequest,
            ValidateOrderResponse,
            CalculatePriceRequest,
            CalculatePriceResponse,
            CheckInventoryRequest,
            CheckInventoryResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order validation and pricing"),
        (name = "Inventory", description = "Stock checks against the shared store"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
