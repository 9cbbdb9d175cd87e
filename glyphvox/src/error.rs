use axum::http::StatusCode;
use thiserror::Error;

/// Message returned to clients for every speech failure. Upstream detail is
/// logged, never relayed.
pub const TTS_FAILURE_MESSAGE: &str = "Text-to-speech request failed";

#[derive(Error, Debug)]
pub enum GlyphvoxError {
    /// A required request field is absent or empty. `hint` tells the client
    /// what to send instead.
    #[error("{message}")]
    MissingField {
        message: &'static str,
        hint: &'static str,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("Invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("{0}")]
    Ocr(String),

    #[error("OCR operation timed out after {0} seconds")]
    OcrTimeout(u64),

    #[error("TTS error: {0}")]
    Tts(String),

    #[error("TTS unavailable: {0}")]
    TtsUnavailable(String),

    #[error("TTS API returned {status}: {body}")]
    TtsUpstream { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Coarse classification of [`GlyphvoxError`], owning the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is missing. HTTP 400.
    MissingField,
    /// The body is not valid JSON or has the wrong shape. HTTP 400.
    InvalidRequest,
    /// The body exceeds the configured limit. HTTP 413.
    PayloadTooLarge,
    /// Decoding, the recognition engine or the speech service failed. HTTP 500.
    Processing,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Processing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GlyphvoxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GlyphvoxError::MissingField { .. } => ErrorKind::MissingField,
            GlyphvoxError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            GlyphvoxError::PayloadTooLarge(_) => ErrorKind::PayloadTooLarge,
            GlyphvoxError::Decode(_)
            | GlyphvoxError::Ocr(_)
            | GlyphvoxError::OcrTimeout(_)
            | GlyphvoxError::Tts(_)
            | GlyphvoxError::TtsUnavailable(_)
            | GlyphvoxError::TtsUpstream { .. }
            | GlyphvoxError::Http(_)
            | GlyphvoxError::Internal(_) => ErrorKind::Processing,
        }
    }

    /// Text safe to put in the `error` field of a response.
    ///
    /// OCR failures keep the underlying message; anything that touched the
    /// speech API collapses to [`TTS_FAILURE_MESSAGE`].
    pub fn client_message(&self) -> String {
        match self {
            GlyphvoxError::Tts(_)
            | GlyphvoxError::TtsUnavailable(_)
            | GlyphvoxError::TtsUpstream { .. }
            | GlyphvoxError::Http(_) => TTS_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphvoxError>;
