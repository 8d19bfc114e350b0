//! Health check handler

use axum::Json;

use super::super::types::HealthResponse;

pub const SERVICE_NAME: &str = "middleware";

/// Health check endpoint
///
/// Static liveness answer; does not probe the store, which is allowed to be
/// down while the service keeps serving bypass responses.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_is_static() {
        let Json(resp) = health_check().await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.service, "middleware");
    }
}
