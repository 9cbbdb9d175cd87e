//! Request/response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::ocr::OcrOutcome;
use crate::tts::SpeechOutcome;

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always `"OK"`.
    pub status: String,
    pub message: String,
    /// Crate version.
    pub version: String,
}

/// Request body for `POST /ocr`.
///
/// `image` is optional at the type level so that an absent field reaches the
/// handler and gets the dedicated missing-field response.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct OcrRequest {
    /// Base64-encoded image. A `data:<mime>;base64,` prefix is accepted.
    #[serde(default)]
    pub image: Option<String>,
}

/// Successful response for `POST /ocr`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OcrResponse {
    pub success: bool,
    /// Recognized text, trimmed.
    pub text: String,
    /// Mean confidence reported by Tesseract, `0..=100`.
    pub confidence: f32,
    /// Length of `text` in UTF-16 code units.
    pub length: usize,
}

impl From<OcrOutcome> for OcrResponse {
    fn from(outcome: OcrOutcome) -> Self {
        Self {
            success: true,
            text: outcome.text,
            confidence: outcome.confidence,
            length: outcome.length,
        }
    }
}

/// Request body for `POST /tts`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct TtsRequest {
    /// Text to synthesize.
    #[serde(default)]
    pub text: Option<String>,
    /// Voice name, e.g. `tr-TR-Wavenet-A`. Defaults to the configured voice.
    #[serde(default)]
    pub voice: Option<String>,
    /// Speaking rate, `1.0` is normal speed.
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Successful response for `POST /tts`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TtsResponse {
    pub success: bool,
    /// Base64-encoded audio.
    pub audio: String,
    /// Voice used for synthesis.
    pub voice: String,
    /// Length of `audio`.
    pub length: usize,
}

impl From<SpeechOutcome> for TtsResponse {
    fn from(outcome: SpeechOutcome) -> Self {
        Self {
            success: true,
            audio: outcome.audio,
            voice: outcome.voice,
            length: outcome.length,
        }
    }
}
