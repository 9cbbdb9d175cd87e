use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;

use crate::error::GlyphvoxError;

/// `Json` extractor whose rejections use the service's error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(GlyphvoxError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for GlyphvoxError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> GlyphvoxError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return GlyphvoxError::PayloadTooLarge(rejection.body_text());
    }

    match rejection {
        JsonRejection::JsonDataError(err) => {
            GlyphvoxError::InvalidRequest(format!("Invalid JSON: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            GlyphvoxError::InvalidRequest(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => GlyphvoxError::InvalidRequest(
            "Missing `Content-Type: application/json` header".to_string(),
        ),
        JsonRejection::BytesRejection(err) => {
            GlyphvoxError::Internal(format!("Failed to read request body: {}", err.body_text()))
        }
        other => GlyphvoxError::InvalidRequest(other.body_text()),
    }
}
