use std::sync::Arc;

use crate::config::Config;
use crate::ocr::OcrProvider;
use crate::tts::TtsProvider;

/// Shared by all requests. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocr: OcrProvider,
    pub tts: TtsProvider,
}

impl AppState {
    pub fn new(config: Config, ocr: OcrProvider, tts: TtsProvider) -> Self {
        Self {
            config: Arc::new(config),
            ocr,
            tts,
        }
    }
}
