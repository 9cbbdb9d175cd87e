use leptess::LepTess;

use crate::config::OcrConfig;
use crate::error::{GlyphvoxError, Result};

/// Raw output of one recognition pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    /// Mean word confidence reported by the engine, `0.0..=100.0`.
    pub confidence: f32,
}

/// Factory for recognition workers.
///
/// Implementations are shared across requests; workers are not.
pub trait RecognitionEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Creates a worker loaded with `config.languages`.
    fn create_worker(&self, config: &OcrConfig) -> Result<Box<dyn RecognitionWorker>>;
}

/// A stateful engine context owned by a single request.
///
/// Dropping the worker releases every native resource it holds.
pub trait RecognitionWorker: Send {
    fn recognize(&mut self, image: &[u8]) -> Result<Recognition>;
}

/// Local Tesseract through leptess.
#[derive(Debug, Default, Clone, Copy)]
pub struct TesseractEngine;

struct TesseractWorker {
    api: LepTess,
}

impl RecognitionEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn create_worker(&self, config: &OcrConfig) -> Result<Box<dyn RecognitionWorker>> {
        let api = LepTess::new(config.data_path.as_deref(), &config.languages).map_err(|e| {
            GlyphvoxError::Ocr(format!(
                "Failed to initialize Tesseract ({}): {e}",
                config.languages
            ))
        })?;
        Ok(Box::new(TesseractWorker { api }))
    }
}

impl RecognitionWorker for TesseractWorker {
    fn recognize(&mut self, image: &[u8]) -> Result<Recognition> {
        self.api
            .set_image_from_mem(image)
            .map_err(|e| GlyphvoxError::Ocr(format!("Failed to set image: {e}")))?;

        let text = self
            .api
            .get_utf8_text()
            .map_err(|e| GlyphvoxError::Ocr(format!("Failed to extract text: {e}")))?;

        // Only meaningful after get_utf8_text has run recognition.
        let confidence = self.api.mean_text_conf().clamp(0, 100) as f32;

        Ok(Recognition { text, confidence })
    }
}
