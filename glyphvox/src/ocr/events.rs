use std::fmt;

use tracing::debug;

/// Lifecycle stage reported while a recognition worker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStatus {
    Initializing,
    Initialized,
    Recognizing,
    Completed,
    Failed,
    Released,
}

impl RecognitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing api",
            Self::Initialized => "initialized api",
            Self::Recognizing => "recognizing text",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Released => "released",
        }
    }
}

impl fmt::Display for RecognitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic progress event. Not authoritative: the result of
/// `OcrProvider::recognize` is the only source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognitionEvent {
    pub status: RecognitionStatus,
    /// Fraction in `0.0..=1.0`.
    pub progress: f32,
}

impl RecognitionEvent {
    pub fn new(status: RecognitionStatus, progress: f32) -> Self {
        Self {
            status,
            progress: progress.clamp(0.0, 1.0),
        }
    }
}

/// Observability hook handed to the OCR provider.
///
/// Called from the blocking recognition thread, so implementations must be
/// cheap and must not block.
pub trait OcrEventSink: Send + Sync {
    fn on_event(&self, event: &RecognitionEvent);
}

/// Default sink: forwards every event to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl OcrEventSink for TracingEventSink {
    fn on_event(&self, event: &RecognitionEvent) {
        debug!(
            status = %event.status,
            progress = event.progress,
            "Tesseract progress"
        );
    }
}
