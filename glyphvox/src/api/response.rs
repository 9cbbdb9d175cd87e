//! # Response Envelope & Error Contract
//!
//! Success bodies are the endpoint DTOs themselves (each carries
//! `"success": true` where the route promises it). Failures share one
//! shape:
//!
//! ```json
//! { "success": false, "error": "<what went wrong>", "message": "<what to do / which step failed>" }
//! ```
//!
//! `success` is present only for processing failures (HTTP 500). Client
//! errors (400, 413) carry just `error` and `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, GlyphvoxError};

/// Failure body returned by every route.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Always `false` when present. Omitted for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Short description of the failure.
    pub error: String,
    /// Human-readable guidance or the step that failed.
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Body<T> {
    Data(T),
    Error(ErrorBody),
}

/// A JSON body plus the status to send it with.
#[derive(Debug, Clone)]
pub struct ApiResponse<T: Serialize> {
    body: Body<T>,
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            body: Body::Data(data),
            status: StatusCode::OK,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorKind`].
    pub fn error(kind: ErrorKind, error: impl Into<String>, message: impl Into<String>) -> Self {
        let success = match kind {
            ErrorKind::Processing => Some(false),
            _ => None,
        };
        Self {
            body: Body::Error(ErrorBody {
                success,
                error: error.into(),
                message: message.into(),
            }),
            status: kind.status(),
        }
    }

    /// Converts an error into a response.
    ///
    /// `failure_message` becomes the `message` of processing failures (e.g.
    /// "Failed to process image"). The full error is logged; the client only
    /// sees [`GlyphvoxError::client_message`].
    pub fn from_error(err: GlyphvoxError, failure_message: &str) -> Self {
        let kind = err.kind();
        let message = match (&err, kind) {
            (GlyphvoxError::MissingField { hint, .. }, _) => (*hint).to_string(),
            (_, ErrorKind::Processing) => {
                tracing::error!(error = %err, "Request processing failed");
                failure_message.to_string()
            }
            (_, other) => default_message(other).to_string(),
        };
        if kind != ErrorKind::Processing {
            tracing::debug!(error = %err, status = %kind.status(), "Rejected request");
        }
        Self::error(kind, err.client_message(), message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn default_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::MissingField => "A required field is missing",
        ErrorKind::InvalidRequest => {
            "Please send a JSON body with the `Content-Type: application/json` header"
        }
        ErrorKind::PayloadTooLarge => "Request body exceeds the configured size limit",
        ErrorKind::Processing => "Request could not be processed",
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self.body) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                let body = serde_json::json!({
                    "success": false,
                    "error": "An internal error occurred",
                    "message": default_message(ErrorKind::Processing),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Errors raised outside a handler body (extractor rejections) use the
/// generic message for their kind.
impl IntoResponse for GlyphvoxError {
    fn into_response(self) -> Response {
        let message = default_message(self.kind());
        ApiResponse::<()>::from_error(self, message).into_response()
    }
}
