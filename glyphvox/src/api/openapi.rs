use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glyphvox API",
        version = "1.0.0",
        description = "Image-to-text with Tesseract and text-to-speech through a cloud API.",
    ),
    paths(
        handlers::health::health_check,
        handlers::ocr::recognize_image,
        handlers::tts::synthesize_speech,
    ),
    components(schemas(
        response::ErrorBody,
        dto::HealthResponse,
        dto::OcrRequest,
        dto::OcrResponse,
        dto::TtsRequest,
        dto::TtsResponse,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "ocr", description = "Text recognition from base64 images"),
        (name = "tts", description = "Speech synthesis from text"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
