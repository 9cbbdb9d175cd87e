use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{GlyphvoxError, Result};

use super::engine::{Recognition, RecognitionEngine, RecognitionWorker, TesseractEngine};
use super::events::{OcrEventSink, RecognitionEvent, RecognitionStatus, TracingEventSink};

/// Text recognized from one image.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrOutcome {
    /// Recognized text with surrounding whitespace removed.
    pub text: String,
    pub confidence: f32,
    /// Length of `text` in UTF-16 code units, as browser clients count it.
    pub length: usize,
}

impl From<Recognition> for OcrOutcome {
    fn from(recognition: Recognition) -> Self {
        let text = recognition.text.trim().to_string();
        let length = text.encode_utf16().count();
        Self {
            text,
            confidence: recognition.confidence,
            length,
        }
    }
}

#[derive(Clone)]
pub struct OcrProvider {
    engine: Arc<dyn RecognitionEngine>,
    events: Arc<dyn OcrEventSink>,
    config: OcrConfig,
    active_workers: Arc<AtomicUsize>,
}

/// Owns a worker for the duration of one recognition.
///
/// Dropping the guard releases the worker and decrements the live-worker
/// count, whichever way the recognition ends.
struct WorkerGuard {
    worker: Option<Box<dyn RecognitionWorker>>,
    active_workers: Arc<AtomicUsize>,
    events: Arc<dyn OcrEventSink>,
}

impl WorkerGuard {
    fn acquire(provider: &OcrProvider) -> Result<Self> {
        let worker = provider.engine.create_worker(&provider.config)?;
        provider.active_workers.fetch_add(1, Ordering::SeqCst);
        Ok(Self {
            worker: Some(worker),
            active_workers: Arc::clone(&provider.active_workers),
            events: Arc::clone(&provider.events),
        })
    }

    fn recognize(&mut self, image: &[u8]) -> Result<Recognition> {
        match self.worker.as_mut() {
            Some(worker) => worker.recognize(image),
            None => Err(GlyphvoxError::Internal(
                "Recognition worker already released".to_string(),
            )),
        }
    }
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        // Drop the engine context before reporting it as gone.
        drop(self.worker.take());
        self.active_workers.fetch_sub(1, Ordering::SeqCst);
        self.events
            .on_event(&RecognitionEvent::new(RecognitionStatus::Released, 1.0));
    }
}

impl OcrProvider {
    /// Tesseract-backed provider logging progress through `tracing`.
    pub fn new(config: &OcrConfig) -> Self {
        Self::with_engine(config, Arc::new(TesseractEngine), Arc::new(TracingEventSink))
    }

    pub fn with_engine(
        config: &OcrConfig,
        engine: Arc<dyn RecognitionEngine>,
        events: Arc<dyn OcrEventSink>,
    ) -> Self {
        Self {
            engine,
            events,
            config: config.clone(),
            active_workers: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn languages(&self) -> &str {
        &self.config.languages
    }

    /// Number of workers currently allocated across all in-flight requests.
    pub fn active_workers(&self) -> usize {
        self.active_workers.load(Ordering::SeqCst)
    }

    /// Creates and immediately releases one worker to check that the engine
    /// and its language data are installed.
    pub async fn probe(&self) -> Result<()> {
        let provider = self.clone();
        tokio::task::spawn_blocking(move || WorkerGuard::acquire(&provider).map(drop))
            .await
            .map_err(|e| GlyphvoxError::Internal(format!("OCR probe task failed: {e}")))??;

        info!(
            engine = self.engine_name(),
            languages = %self.config.languages,
            "OCR engine ready"
        );
        Ok(())
    }

    pub async fn recognize(&self, image: Vec<u8>) -> Result<OcrOutcome> {
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let provider = self.clone();
        let span = tracing::Span::current();

        let task = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            provider.recognize_blocking(&image)
        });

        match tokio::time::timeout(timeout_duration, task).await {
            Ok(Ok(result)) => result.map(OcrOutcome::from),
            Ok(Err(e)) => Err(GlyphvoxError::Ocr(format!("OCR task panicked: {e}"))),
            Err(_) => {
                // The blocking task keeps running; its guard releases the
                // worker once the engine returns.
                warn!(
                    timeout_secs = self.config.timeout_secs,
                    "OCR timed out, worker will be released when the engine returns"
                );
                Err(GlyphvoxError::OcrTimeout(self.config.timeout_secs))
            }
        }
    }

    fn recognize_blocking(&self, image: &[u8]) -> Result<Recognition> {
        self.emit(RecognitionStatus::Initializing, 0.0);

        let mut guard = match WorkerGuard::acquire(self) {
            Ok(guard) => guard,
            Err(e) => {
                self.emit(RecognitionStatus::Failed, 1.0);
                return Err(e);
            }
        };
        self.emit(RecognitionStatus::Initialized, 0.25);

        self.emit(RecognitionStatus::Recognizing, 0.5);
        let result = guard.recognize(image);

        match &result {
            Ok(_) => self.emit(RecognitionStatus::Completed, 1.0),
            Err(_) => self.emit(RecognitionStatus::Failed, 1.0),
        }
        result
    }

    fn emit(&self, status: RecognitionStatus, progress: f32) {
        self.events.on_event(&RecognitionEvent::new(status, progress));
    }
}
