//! OCR (Optical Character Recognition) Module
//!
//! Turns uploaded image bytes into text with a per-request recognition
//! worker.
//!
//! # Architecture
//!
//! - `RecognitionEngine` creates workers; `TesseractEngine` is the leptess
//!   implementation used in production.
//! - `OcrProvider` runs one worker per call on the blocking pool. The worker
//!   lives inside a guard that releases it on every exit path, so
//!   `OcrProvider::active_workers` is back to zero once a call returns.
//! - Progress is reported to an injected `OcrEventSink`
//!   (`TracingEventSink` by default).
//!
//! # Configuration
//!
//! See `OcrConfig` in `config.rs`:
//! - `languages`: Tesseract language string, default `tur+eng`
//! - `data_path`: optional tessdata directory
//! - `timeout_secs`: upper bound for awaiting a recognition
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr);
//! let bytes = decode_image(&request.image)?;
//! let outcome = ocr.recognize(bytes).await?;
//! ```

mod decode;
mod engine;
mod events;
mod provider;

pub use decode::decode_image;
pub use engine::{Recognition, RecognitionEngine, RecognitionWorker, TesseractEngine};
pub use events::{OcrEventSink, RecognitionEvent, RecognitionStatus, TracingEventSink};
pub use provider::{OcrOutcome, OcrProvider};
