use axum::extract::State;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::api::dto::{OcrRequest, OcrResponse};
use crate::api::extractors::AppJson;
use crate::api::response::{ApiResponse, ErrorBody};
use crate::api::AppState;
use crate::error::{GlyphvoxError, Result};
use crate::ocr::{decode_image, OcrOutcome};

pub const OCR_FAILURE_MESSAGE: &str = "Failed to process image";

/// `POST /ocr`
#[utoipa::path(
    post,
    path = "/ocr",
    tag = "ocr",
    request_body = OcrRequest,
    responses(
        (status = 200, description = "Text recognized", body = OcrResponse),
        (status = 400, description = "No image provided or malformed body", body = ErrorBody),
        (status = 413, description = "Body exceeds the size limit", body = ErrorBody),
        (status = 500, description = "Decoding or recognition failed", body = ErrorBody),
    )
)]
pub async fn recognize_image(
    State(state): State<AppState>,
    AppJson(request): AppJson<OcrRequest>,
) -> ApiResponse<OcrResponse> {
    let span = info_span!("ocr", request_id = %Uuid::new_v4());

    async move {
        info!("OCR request received");

        let image = match request.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => {
                return ApiResponse::from_error(
                    GlyphvoxError::MissingField {
                        message: "No image provided",
                        hint: "Please send base64 encoded image in \"image\" field",
                    },
                    OCR_FAILURE_MESSAGE,
                )
            }
        };

        match run_ocr(&state, image).await {
            Ok(outcome) => {
                info!(
                    length = outcome.length,
                    confidence = outcome.confidence,
                    "OCR completed successfully"
                );
                ApiResponse::success(OcrResponse::from(outcome))
            }
            Err(e) => ApiResponse::from_error(e, OCR_FAILURE_MESSAGE),
        }
    }
    .instrument(span)
    .await
}

async fn run_ocr(state: &AppState, image: &str) -> Result<OcrOutcome> {
    info!(
        image_len = image.len(),
        languages = %state.ocr.languages(),
        "Processing image with {}",
        state.ocr.engine_name()
    );

    let bytes = decode_image(image)?;
    debug!(
        bytes = bytes.len(),
        mime = infer::get(&bytes).map_or("unknown", |kind| kind.mime_type()),
        "Decoded image"
    );

    state.ocr.recognize(bytes).await
}
