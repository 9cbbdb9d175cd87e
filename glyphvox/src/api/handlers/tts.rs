use axum::extract::State;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::api::dto::{TtsRequest, TtsResponse};
use crate::api::extractors::AppJson;
use crate::api::response::{ApiResponse, ErrorBody};
use crate::api::AppState;
use crate::error::GlyphvoxError;

pub const TTS_FAILURE_MESSAGE: &str = "Failed to synthesize speech";

/// `POST /tts`
#[utoipa::path(
    post,
    path = "/tts",
    tag = "tts",
    request_body = TtsRequest,
    responses(
        (status = 200, description = "Speech synthesized", body = TtsResponse),
        (status = 400, description = "No text provided or malformed body", body = ErrorBody),
        (status = 413, description = "Body exceeds the size limit", body = ErrorBody),
        (status = 500, description = "Speech service failed", body = ErrorBody),
    )
)]
pub async fn synthesize_speech(
    State(state): State<AppState>,
    AppJson(request): AppJson<TtsRequest>,
) -> ApiResponse<TtsResponse> {
    let span = info_span!("tts", request_id = %Uuid::new_v4());

    async move {
        info!("TTS request received");

        let text = match request.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => {
                return ApiResponse::from_error(
                    GlyphvoxError::MissingField {
                        message: "No text provided",
                        hint: "Please send text in \"text\" field",
                    },
                    TTS_FAILURE_MESSAGE,
                )
            }
        };

        let speech = state
            .tts
            .resolve(text, request.voice.as_deref(), request.speed);
        info!(
            voice = %speech.voice,
            speaking_rate = speech.speaking_rate,
            chars = speech.text.chars().count(),
            "Synthesizing speech"
        );

        match state.tts.synthesize(speech).await {
            Ok(outcome) => {
                info!(voice = %outcome.voice, length = outcome.length, "TTS completed successfully");
                ApiResponse::success(TtsResponse::from(outcome))
            }
            Err(e) => ApiResponse::from_error(e, TTS_FAILURE_MESSAGE),
        }
    }
    .instrument(span)
    .await
}
