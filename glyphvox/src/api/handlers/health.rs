use axum::Json;

use crate::api::dto::HealthResponse;

pub const HEALTH_MESSAGE: &str = "OCR & TTS backend is running";

/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is reachable", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: HEALTH_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
