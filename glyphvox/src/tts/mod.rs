//! Text-to-speech through a cloud synthesis API.
//!
//! `TtsProvider` applies voice/rate defaults and delegates to
//! `GoogleTtsClient`. Without a configured credential the provider is
//! unavailable and every call fails as a processing error.

mod api;
mod provider;

pub use api::GoogleTtsClient;
pub use provider::{TtsProvider, DEFAULT_SPEAKING_RATE};

/// Fully resolved synthesis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: String,
    pub speaking_rate: f64,
}

/// Synthesized audio as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOutcome {
    /// Base64 audio payload.
    pub audio: String,
    /// Voice actually requested.
    pub voice: String,
    /// Length of `audio`.
    pub length: usize,
}
