//! glyphvox: a small HTTP backend with two stateless pipelines.
//!
//! - `POST /ocr`: base64 image → Tesseract (`ocr`) → text and confidence
//! - `POST /tts`: text → cloud text-to-speech (`tts`) → base64 audio
//! - `GET /`: static health payload
//!
//! The binary in `main.rs` wires [`config::Config`] into an
//! [`api::AppState`] and serves [`api::create_router`].

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
pub mod tts;
